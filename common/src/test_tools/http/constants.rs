pub const PAGE_ID_FOR_MOCK_REQUESTS: &str = "444444444444";
pub const LEADGEN_ID_FOR_MOCK_REQUESTS: &str = "987654321098765";
pub const CLIENT_NAME_FOR_MOCK_REQUESTS: &str = "Test";
