//! クリップボードユーティリティ
//!
//! インストールコマンドのコピーに使う。書き込み失敗（ヘッドレス環境、
//! 権限なし）は致命的ではなく、呼び出し側には成否のみを返す。

/// クリップボード書き込みの抽象
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// arboard によるシステムクリップボード（遅延初期化）
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn ensure(&mut self) -> Result<&mut arboard::Clipboard, String> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().map_err(|e| e.to_string())?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => Ok(clipboard),
            None => Err("clipboard not initialized".to_string()),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.ensure()?.set_text(text.to_string()).map_err(|e| e.to_string())
    }
}

/// テキストをクリップボードへコピーする
///
/// 失敗は握りつぶし、成功可否のみ返す。パニックもエラー伝播もしない。
pub fn copy_text(clipboard: &mut dyn Clipboard, text: &str) -> bool {
    clipboard.set_text(text).is_ok()
}

/// テスト用モック
#[cfg(test)]
pub struct MockClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

#[cfg(test)]
impl MockClipboard {
    pub fn new() -> Self {
        Self {
            contents: None,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }
}

#[cfg(test)]
impl Clipboard for MockClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.fail {
            return Err("clipboard unavailable".to_string());
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_text_returns_true_on_success() {
        let mut clipboard = MockClipboard::new();
        assert!(copy_text(&mut clipboard, "npx molthub@latest install weather"));
        assert_eq!(
            clipboard.contents.as_deref(),
            Some("npx molthub@latest install weather")
        );
    }

    #[test]
    fn copy_text_swallows_failure() {
        let mut clipboard = MockClipboard::failing();
        assert!(!copy_text(&mut clipboard, "npx molthub@latest install weather"));
        assert!(clipboard.contents.is_none());
    }
}
