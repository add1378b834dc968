use super::*;

#[test]
fn build_client_does_not_panic() {
    let _client = build_client();
}

#[tokio::test]
async fn with_retry_success_first_try() {
    let mut call_count = 0;
    let result = with_retry(
        || {
            call_count += 1;
            async { Ok::<_, HubError>(42) }
        },
        3,
    )
    .await;

    assert_eq!(result.unwrap(), 42);
    assert_eq!(call_count, 1);
}

#[tokio::test]
async fn with_retry_retries_5xx() {
    let mut call_count = 0;
    let result = with_retry(
        || {
            call_count += 1;
            async move {
                if call_count < 3 {
                    Err(HubError::Feed {
                        url: "https://molt.bot/feeds/news.json".to_string(),
                        status: 503,
                    })
                } else {
                    Ok(7)
                }
            }
        },
        3,
    )
    .await;

    assert_eq!(result.unwrap(), 7);
    assert_eq!(call_count, 3);
}

#[tokio::test]
async fn with_retry_gives_up_after_max_retries() {
    let mut call_count = 0;
    let result: Result<i32> = with_retry(
        || {
            call_count += 1;
            async {
                Err(HubError::Feed {
                    url: "https://molt.bot/feeds/news.json".to_string(),
                    status: 500,
                })
            }
        },
        2,
    )
    .await;

    assert!(result.is_err());
    // 初回 + 2回リトライ = 3回
    assert_eq!(call_count, 3);
}

#[tokio::test]
async fn with_retry_non_retryable_fails_immediately() {
    let mut call_count = 0;
    let result: Result<i32> = with_retry(
        || {
            call_count += 1;
            async {
                Err(HubError::Feed {
                    url: "https://molt.bot/feeds/news.json".to_string(),
                    status: 404,
                })
            }
        },
        3,
    )
    .await;

    assert!(result.is_err());
    assert_eq!(call_count, 1);
}
