//! Greeting endpoint.

use crate::config::HELLO_MESSAGE;

pub async fn hello() -> &'static str {
    HELLO_MESSAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_body() {
        assert_eq!(hello().await, "Hello from YorkU Course Planner Backend!");
    }

    #[tokio::test]
    async fn test_hello_is_stable_across_calls() {
        assert_eq!(hello().await, hello().await);
    }
}
