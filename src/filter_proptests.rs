use super::*;
use crate::catalog::NewsItem;
use proptest::prelude::*;

/// カテゴリキーとして使う小さな固定集合
fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("新闻".to_string()),
        Just("教程".to_string()),
        Just("社区".to_string()),
        Just("发布".to_string()),
    ]
}

fn news_strategy() -> impl Strategy<Value = NewsItem> {
    ("[a-z]{1,12}", category_strategy()).prop_map(|(title, category)| NewsItem {
        title,
        source: "Moltbot Blog".to_string(),
        url: "https://molt.bot/blog".to_string(),
        image_url: None,
        category,
        published_at: None,
    })
}

fn collection_strategy() -> impl Strategy<Value = Vec<NewsItem>> {
    proptest::collection::vec(news_strategy(), 0..24)
}

fn filter_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(ALL_KEY.to_string()), category_strategy()]
}

proptest! {
    /// filter(filter(C, k), k) == filter(C, k)
    #[test]
    fn prop_filter_is_idempotent(
        items in collection_strategy(),
        key in filter_key_strategy()
    ) {
        let once: Vec<NewsItem> = filter_by_category(&items, &key)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<&NewsItem> = filter_by_category(&once, &key);

        prop_assert_eq!(once.iter().collect::<Vec<_>>(), twice);
    }

    /// filter(C, "all") == C
    #[test]
    fn prop_all_is_identity(items in collection_strategy()) {
        let result = filter_by_category(&items, ALL_KEY);
        prop_assert_eq!(result, items.iter().collect::<Vec<_>>());
    }

    /// 絞り込み結果はすべて指定カテゴリを持つ
    #[test]
    fn prop_result_matches_key(
        items in collection_strategy(),
        key in category_strategy()
    ) {
        for item in filter_by_category(&items, &key) {
            prop_assert_eq!(&item.category, &key);
        }
    }

    /// 絞り込みは元の相対順序を保持する
    #[test]
    fn prop_filter_is_stable(
        items in collection_strategy(),
        key in filter_key_strategy()
    ) {
        let result = filter_by_category(&items, &key);
        let mut source_positions = result.iter().map(|item| {
            items
                .iter()
                .position(|candidate| std::ptr::eq(candidate, *item))
                .unwrap()
        });
        let mut previous = None;
        for position in &mut source_positions {
            if let Some(prev) = previous {
                prop_assert!(position > prev);
            }
            previous = Some(position);
        }
    }
}
