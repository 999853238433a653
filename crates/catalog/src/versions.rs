//! Every transport version known to this build.
//!
//! Add new versions at the bottom of the list. Ids use the `M_NNN_SS_P` layout:
//! keep the major, bump the server part by one, leave the variant part at `00`,
//! and bump the patch part only for a patch release, placing it in id order.
//!
//! A reverted wire change still gets a new id. Ids never go backwards.

wirever_registry::transport_versions! {
	/// Named transport version constants, in declaration order.
	pub struct TransportVersions {
		ZERO = 0,
		V_7_0_0 = 7_00_00_99,
		V_7_0_1 = 7_00_01_99,
		V_7_1_0 = 7_01_00_99,
		V_7_2_0 = 7_02_00_99,
		V_7_2_1 = 7_02_01_99,
		V_7_3_0 = 7_03_00_99,
		V_7_3_2 = 7_03_02_99,
		V_7_4_0 = 7_04_00_99,
		V_7_5_0 = 7_05_00_99,
		V_7_6_0 = 7_06_00_99,
		V_7_7_0 = 7_07_00_99,
		V_7_8_0 = 7_08_00_99,
		V_7_8_1 = 7_08_01_99,
		V_7_9_0 = 7_09_00_99,
		V_7_10_0 = 7_10_00_99,
		V_7_10_1 = 7_10_01_99,
		V_7_11_0 = 7_11_00_99,
		V_7_12_0 = 7_12_00_99,
		V_7_13_0 = 7_13_00_99,
		V_7_14_0 = 7_14_00_99,
		V_7_15_0 = 7_15_00_99,
		V_7_15_1 = 7_15_01_99,
		V_7_16_0 = 7_16_00_99,
		V_7_17_0 = 7_17_00_99,
		V_7_17_1 = 7_17_01_99,
		V_7_17_8 = 7_17_08_99,
		V_8_0_0 = 8_00_00_99,
		V_8_1_0 = 8_01_00_99,
		V_8_2_0 = 8_02_00_99,
		V_8_3_0 = 8_03_00_99,
		V_8_4_0 = 8_04_00_99,
		V_8_5_0 = 8_05_00_99,
		V_8_6_0 = 8_06_00_99,
		V_8_6_1 = 8_06_01_99,
		V_8_7_0 = 8_07_00_99,
		V_8_7_1 = 8_07_01_99,
		V_8_8_0 = 8_08_00_99,
		V_8_8_1 = 8_08_01_99,
		V_8_9_X = 8_500_020,
		V_8_10_X = 8_500_061,
		V_8_11_X = 8_512_00_1,
		V_8_12_0 = 8_560_00_0,
		V_8_12_1 = 8_560_00_1,
		V_8_13_0 = 8_595_00_0,
		V_8_13_4 = 8_595_00_1,
		V_8_14_0 = 8_636_00_1,
		V_8_15_0 = 8_702_00_2,
		V_8_15_2 = 8_702_00_3,
		QUERY_RULES_LIST_INCLUDES_TYPES_BACKPORT_8_15 = 8_702_00_4,
		ML_INFERENCE_DONT_DELETE_WHEN_SEMANTIC_TEXT_EXISTS = 8_703_00_0,
		INFERENCE_ADAPTIVE_ALLOCATIONS = 8_704_00_0,
		INDEX_REQUEST_UPDATE_BY_SCRIPT_ORIGIN = 8_705_00_0,
		ML_INFERENCE_COHERE_UNUSED_RERANK_SETTINGS_REMOVED = 8_706_00_0,
		ENRICH_CACHE_STATS_SIZE_ADDED = 8_707_00_0,
		ENTERPRISE_GEOIP_DOWNLOADER = 8_708_00_0,
		NODES_STATS_ENUM_SET = 8_709_00_0,
		MASTER_NODE_METRICS = 8_710_00_0,
		SEGMENT_LEVEL_FIELDS_STATS = 8_711_00_0,
		ML_ADD_DETECTION_RULE_PARAMS = 8_712_00_0,
		FIX_VECTOR_SIMILARITY_INNER_HITS = 8_713_00_0,
		INDEX_REQUEST_UPDATE_BY_DOC_ORIGIN = 8_714_00_0,
		ESQL_ATTRIBUTE_CACHED_SERIALIZATION = 8_715_00_0,
		REGISTER_SLM_STATS = 8_716_00_0,
		ESQL_NESTED_UNSUPPORTED = 8_717_00_0,
		ESQL_SINGLE_VALUE_QUERY_SOURCE = 8_718_00_0,
		ESQL_ORIGINAL_INDICES = 8_719_00_0,
		ML_INFERENCE_EIS_INTEGRATION_ADDED = 8_720_00_0,
		INGEST_PIPELINE_EXCEPTION_ADDED = 8_721_00_0,
		ZDT_NANOS_SUPPORT_BROKEN = 8_722_00_0,
		REMOVE_GLOBAL_RETENTION_FROM_TEMPLATES = 8_723_00_0,
		RANDOM_RERANKER_RETRIEVER = 8_724_00_0,
		ESQL_PROFILE_SLEEPS = 8_725_00_0,
		ZDT_NANOS_SUPPORT = 8_726_00_0,
		LTR_SERVERLESS_RELEASE = 8_727_00_0,
		ALLOW_PARTIAL_SEARCH_RESULTS_IN_PIT = 8_728_00_0,
		RANK_DOCS_RETRIEVER = 8_729_00_0,
		ESQL_ES_FIELD_CACHED_SERIALIZATION = 8_730_00_0,
		ADD_MANAGE_ROLES_PRIVILEGE = 8_731_00_0,
		REPOSITORIES_TELEMETRY = 8_732_00_0,
		ML_INFERENCE_ALIBABACLOUD_SEARCH_ADDED = 8_733_00_0,
		FIELD_CAPS_RESPONSE_INDEX_MODE = 8_734_00_0,
		GET_DATA_STREAMS_VERBOSE = 8_735_00_0,
		ESQL_ADD_INDEX_MODE_CONCRETE_INDICES = 8_736_00_0,
		UNASSIGNED_PRIMARY_COUNT_ON_CLUSTER_HEALTH = 8_737_00_0,
		ESQL_AGGREGATE_EXEC_TRACKS_INTERMEDIATE_ATTRS = 8_738_00_0,
		CCS_TELEMETRY_STATS = 8_739_00_0,
		GLOBAL_RETENTION_TELEMETRY = 8_740_00_0,
		ROUTING_TABLE_VERSION_REMOVED = 8_741_00_0,
		ML_SCHEDULED_EVENT_TIME_SHIFT_CONFIGURATION = 8_742_00_0,
		SIMULATE_COMPONENT_TEMPLATES_SUBSTITUTIONS = 8_743_00_0,
		ML_INFERENCE_IBM_WATSONX_EMBEDDINGS_ADDED = 8_744_00_0,
		BULK_INCREMENTAL_STATE = 8_745_00_0,
		FAILURE_STORE_STATUS_IN_INDEX_RESPONSE = 8_746_00_0,
		ESQL_AGGREGATION_OPERATOR_STATUS_FINISH_NANOS = 8_747_00_0,
		ML_TELEMETRY_MEMORY_ADDED = 8_748_00_0,
		ILM_ADD_SEARCHABLE_SNAPSHOT_TOTAL_SHARDS_PER_NODE = 8_749_00_0,
		SEMANTIC_TEXT_SEARCH_INFERENCE_ID = 8_750_00_0,
		ML_INFERENCE_CHUNKING_SETTINGS = 8_751_00_0,
		SEMANTIC_QUERY_INNER_HITS = 8_752_00_0,
		RETAIN_ILM_STEP_INFO = 8_753_00_0,
		ADD_DATA_STREAM_OPTIONS = 8_754_00_0,
		CCS_REMOTE_TELEMETRY_STATS = 8_755_00_0,
		ESQL_CCS_EXECUTION_INFO = 8_756_00_0,
		REGEX_AND_RANGE_INTERVAL_QUERIES = 8_757_00_0,
		RRF_QUERY_REWRITE = 8_758_00_0,
		SEARCH_FAILURE_STATS = 8_759_00_0,
		INGEST_GEO_DATABASE_PROVIDERS = 8_760_00_0,
		DATE_TIME_DOC_VALUES_LOCALES = 8_761_00_0,
		FAST_REFRESH_RCO = 8_762_00_0,
		TEXT_SIMILARITY_RERANKER_QUERY_REWRITE = 8_763_00_0,
		SIMULATE_INDEX_TEMPLATES_SUBSTITUTIONS = 8_764_00_0,
		RETRIEVERS_TELEMETRY_ADDED = 8_765_00_0,
		ESQL_CACHED_STRING_SERIALIZATION = 8_766_00_0,
		CHUNK_SENTENCE_OVERLAP_SETTING_ADDED = 8_767_00_0,
		OPT_IN_ESQL_CCS_EXECUTION_INFO = 8_768_00_0,
		QUERY_RULE_TEST_API = 8_769_00_0,
		ESQL_PER_AGGREGATE_FILTER = 8_770_00_0,
		ML_INFERENCE_ATTACH_TO_EXISTSING_DEPLOYMENT = 8_771_00_0,
		CONVERT_FAILURE_STORE_OPTIONS_TO_SELECTOR_OPTIONS_INTERNALLY = 8_772_00_0,
		INFERENCE_DONT_PERSIST_ON_READ_BACKPORT_8_16 = 8_772_00_1,
		ADD_COMPATIBILITY_VERSIONS_TO_NODE_INFO_BACKPORT_8_16 = 8_772_00_2,
		SKIP_INNER_HITS_SEARCH_SOURCE_BACKPORT_8_16 = 8_772_00_3,
		QUERY_RULES_LIST_INCLUDES_TYPES_BACKPORT_8_16 = 8_772_00_4,
		REMOVE_MIN_COMPATIBLE_SHARD_NODE = 8_773_00_0,
		REVERT_REMOVE_MIN_COMPATIBLE_SHARD_NODE = 8_774_00_0,
		ESQL_FIELD_ATTRIBUTE_PARENT_SIMPLIFIED = 8_775_00_0,
		INFERENCE_DONT_PERSIST_ON_READ = 8_776_00_0,
		SIMULATE_MAPPING_ADDITION = 8_777_00_0,
		INTRODUCE_ALL_APPLICABLE_SELECTOR = 8_778_00_0,
		INDEX_MODE_LOOKUP = 8_779_00_0,
		INDEX_REQUEST_REMOVE_METERING = 8_780_00_0,
		CPU_STAT_STRING_PARSING = 8_781_00_0,
		QUERY_RULES_RETRIEVER = 8_782_00_0,
		ESQL_CCS_EXEC_INFO_WITH_FAILURES = 8_783_00_0,
		LOGSDB_TELEMETRY = 8_784_00_0,
		LOGSDB_TELEMETRY_STATS = 8_785_00_0,
		KQL_QUERY_ADDED = 8_786_00_0,
		ROLE_MONITOR_STATS = 8_787_00_0,
		DATA_STREAM_INDEX_VERSION_DEPRECATION_CHECK = 8_788_00_0,
		ADD_COMPATIBILITY_VERSIONS_TO_NODE_INFO = 8_789_00_0,
		VERTEX_AI_INPUT_TYPE_ADDED = 8_790_00_0,
		SKIP_INNER_HITS_SEARCH_SOURCE = 8_791_00_0,
		QUERY_RULES_LIST_INCLUDES_TYPES = 8_792_00_0,
		INDEX_STATS_ADDITIONAL_FIELDS = 8_793_00_0,
		INDEX_STATS_ADDITIONAL_FIELDS_REVERT = 8_794_00_0,
		FAST_REFRESH_RCO_2 = 8_795_00_0,
		ESQL_ENRICH_RUNTIME_WARNINGS = 8_796_00_0,
		INGEST_PIPELINE_CONFIGURATION_AS_MAP = 8_797_00_0,
		LOGSDB_TELEMETRY_CUSTOM_CUTOFF_DATE_FIX_8_17 = 8_797_00_1,
		SOURCE_MODE_TELEMETRY_FIX_8_17 = 8_797_00_2,
		INDEXING_PRESSURE_THROTTLING_STATS = 8_798_00_0,
		REINDEX_DATA_STREAMS = 8_799_00_0,
		ESQL_REMOVE_NODE_LEVEL_PLAN = 8_800_00_0,
		LOGSDB_TELEMETRY_CUSTOM_CUTOFF_DATE = 8_801_00_0,
		SOURCE_MODE_TELEMETRY = 8_802_00_0,
	}
}
