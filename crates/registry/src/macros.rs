//! Declaration macro for transport version catalogs.

/// Declares a struct holding one [`TransportVersion`](crate::TransportVersion) per
/// named constant.
///
/// This macro generates:
/// - The struct, with one public field per constant
/// - `NAMES`, the constant names in declaration order
/// - `declare`, which passes every constant through
///   [`VersionDeclarations::def`](crate::VersionDeclarations::def) in source order
///
/// New versions go at the bottom of the list. Field initializers run in the
/// order they are written, so a misplaced id fails `declare` with
/// [`RegistryError::OutOfOrder`](crate::RegistryError::OutOfOrder).
///
/// # Example
///
/// ```ignore
/// transport_versions! {
///     pub struct TransportVersions {
///         ZERO = 0,
///         V_8_15_0 = 8_702_00_2,
///         ESQL_PROFILE_SLEEPS = 8_725_00_0,
///     }
/// }
///
/// let mut decls = VersionDeclarations::default();
/// let versions = TransportVersions::declare(&mut decls)?;
/// assert!(versions.ESQL_PROFILE_SLEEPS.on_or_after(versions.V_8_15_0));
/// ```
#[macro_export]
macro_rules! transport_versions {
	(
		$(#[$meta:meta])*
		$vis:vis struct $ty:ident {
			$( $(#[$field_meta:meta])* $name:ident = $id:expr ),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[allow(non_snake_case)]
		#[derive(Debug, Clone, Copy, PartialEq, Eq)]
		$vis struct $ty {
			$( $(#[$field_meta])* pub $name: $crate::TransportVersion, )*
		}

		impl $ty {
			/// Constant names in declaration order.
			pub const NAMES: &'static [&'static str] = &[$(stringify!($name)),*];

			/// Declares every constant against `decls`, in source order.
			pub fn declare(
				decls: &mut $crate::VersionDeclarations,
			) -> ::core::result::Result<Self, $crate::RegistryError> {
				::core::result::Result::Ok(Self {
					$( $name: decls.def(stringify!($name), $id)?, )*
				})
			}
		}
	};
}
