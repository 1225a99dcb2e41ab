//! Tests to verify that all public types are Send + Sync as required.

use agent_toolkit_core::*;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_domain_types_are_send_sync() {
    assert_send_sync::<ToolKind>();
    assert_send_sync::<HttpMethod>();
    assert_send_sync::<Modality>();
}

#[test]
fn test_config_types_are_send_sync() {
    assert_send_sync::<ToolkitConfig>();
    assert_send_sync::<ToolkitConfigBuilder>();
}

#[test]
fn test_error_is_send_sync() {
    assert_send_sync::<Error>();
}
