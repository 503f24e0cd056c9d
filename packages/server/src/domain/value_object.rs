//! Value objects shared across the domain.

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// Maximum number of characters in a client's display name.
pub const MAX_DISPLAY_NAME_CHARS: usize = 100;

/// Maximum number of characters in a control signal.
pub const MAX_CONTROL_SIGNAL_CHARS: usize = 100;

/// Opaque room identifier. Any string is a valid room id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Allocate a fresh, random room id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for RoomId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-supplied client identity, stable within a room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ClientId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form display name announced by a client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let len = value.chars().count();
        if len > MAX_DISPLAY_NAME_CHARS {
            return Err(ValueObjectError::DisplayNameTooLong {
                len,
                max: MAX_DISPLAY_NAME_CHARS,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque control string forwarded to presentation viewers (e.g. "left", "right").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSignal(String);

impl ControlSignal {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyControlSignal);
        }
        let len = value.chars().count();
        if len > MAX_CONTROL_SIGNAL_CHARS {
            return Err(ValueObjectError::ControlSignalTooLong {
                len,
                max: MAX_CONTROL_SIGNAL_CHARS,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ControlSignal {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Base64 capability string granting admin rights over one room.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminToken(String);

impl AdminToken {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    /// Byte-exact comparison against a presented token.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_bytes() == candidate.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminToken(..)")
    }
}

/// Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Whole seconds since the epoch, as sent on the wire.
    pub fn as_unix_secs(&self) -> i64 {
        self.0.div_euclid(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_generate_is_unique() {
        // テスト項目: 生成されたルーム ID は毎回異なる
        // when (操作):
        let a = RoomId::generate();
        let b = RoomId::generate();

        // then (期待する結果):
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_room_id_accepts_empty_string() {
        // テスト項目: 空文字列も有効なルーム ID として扱われる
        let id = RoomId::new(String::new());
        assert_eq!(id.as_str(), "");
    }

    #[test]
    fn test_display_name_rejects_too_long() {
        // テスト項目: 上限を超える表示名はエラーになる
        // given (前提条件):
        let long = "a".repeat(MAX_DISPLAY_NAME_CHARS + 1);

        // when (操作):
        let result = DisplayName::new(long);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValueObjectError::DisplayNameTooLong {
                len: MAX_DISPLAY_NAME_CHARS + 1,
                max: MAX_DISPLAY_NAME_CHARS,
            })
        );
    }

    #[test]
    fn test_display_name_counts_characters_not_bytes() {
        // テスト項目: 表示名の長さはバイト数ではなく文字数で数える
        let name = "あ".repeat(MAX_DISPLAY_NAME_CHARS);
        assert!(DisplayName::new(name).is_ok());
    }

    #[test]
    fn test_control_signal_rejects_empty() {
        // テスト項目: 空のコントロール文字列はエラーになる
        assert_eq!(
            ControlSignal::new(String::new()),
            Err(ValueObjectError::EmptyControlSignal)
        );
    }

    #[test]
    fn test_admin_token_matches_is_byte_exact() {
        // テスト項目: 管理トークンの比較は完全一致のみ成功する
        // given (前提条件):
        let token = AdminToken::new("abc=".to_string());

        // then (期待する結果):
        assert!(token.matches("abc="));
        assert!(!token.matches("abc"));
        assert!(!token.matches("ABC="));
        assert!(!token.matches(""));
    }

    #[test]
    fn test_admin_token_debug_is_redacted() {
        // テスト項目: Debug 出力にトークンの値が含まれない
        let token = AdminToken::new("secret-value".to_string());
        assert!(!format!("{token:?}").contains("secret-value"));
    }

    #[test]
    fn test_timestamp_as_unix_secs() {
        // テスト項目: ミリ秒のタイムスタンプが秒に切り捨てられる
        assert_eq!(Timestamp::new(1_700_000_123_999).as_unix_secs(), 1_700_000_123);
        assert_eq!(Timestamp::new(0).as_unix_secs(), 0);
    }
}
