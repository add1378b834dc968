//! 描画先ドキュメント
//!
//! コンテナID → マークアップ断片の対応を保持する軽量なモデル。
//! レンダラは常にコンテナ内容を丸ごと置き換える。部分的な差し込みはない。

/// 名前付きコンテナを持つドキュメント
#[derive(Debug, Default)]
pub struct Document {
    /// (コンテナID, 内容) の組。挿入順を保持する。
    containers: Vec<(String, String)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// コンテナを登録する（既存IDなら何もしない）
    pub fn add_container(&mut self, id: &str) {
        if !self.containers.iter().any(|(cid, _)| cid == id) {
            self.containers.push((id.to_string(), String::new()));
        }
    }

    /// コンテナ内容を丸ごと置き換える
    ///
    /// 未登録のIDは no-op で `false` を返す。クラッシュしない。
    pub fn replace(&mut self, id: &str, html: String) -> bool {
        match self.containers.iter_mut().find(|(cid, _)| cid == id) {
            Some((_, content)) => {
                *content = html;
                true
            }
            None => false,
        }
    }

    /// コンテナ内容を参照する
    pub fn content(&self, id: &str) -> Option<&str> {
        self.containers
            .iter()
            .find(|(cid, _)| cid == id)
            .map(|(_, content)| content.as_str())
    }
}

/// HTML特殊文字のエスケープ
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
