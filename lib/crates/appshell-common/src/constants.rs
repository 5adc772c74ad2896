//! Well-known names and error codes shared by the management API and its clients.

/// Application name used when no explicit application has been selected.
pub const DEFAULT_APPLICATION_NAME: &str = "default";

/// Legacy reason code: the requested application does not exist.
pub const ERR_REASON_CODE_FAILED_TO_LOCATE_APP: &str = "failed_to_locate_app";

/// Legacy reason code: the management endpoint could not be reached or answered garbage.
pub const ERR_REASON_CODE_COMM_ERROR: &str = "comm_error";

/// REST message code: the addressed resource does not exist.
pub const ERR_MESSAGE_CODE_MISSING_RESOURCE: &str = "missing_resource";

/// REST message code: the request failed below the API layer.
pub const ERR_MESSAGE_CODE_HTTP_FAILURE: &str = "http_failure";

/// API version segment used by the versioned REST endpoints.
pub const DEFAULT_API_VERSION: &str = "2.7.1";
