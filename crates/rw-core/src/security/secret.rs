use std::fmt;
use std::ops::Deref;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// A password value that must never be logged or cloned.
///
/// 敏感字符串：
/// - 不可 Clone
/// - Debug / Display 只输出 [REDACTED]
/// - 比较为常量时间
/// - Drop 时清零内存
#[derive(Default)]
pub struct SecretString {
    inner: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Borrow the secret. Only the validator and the wire encoder read it.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }

    /// Replace the stored value, zeroizing the previous one.
    pub fn replace(&mut self, value: String) {
        self.inner.zeroize();
        self.inner = value;
    }

    /// Copy into a fresh secret; used when the draft hands credentials to the payload.
    pub fn duplicate(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.inner.as_bytes().ct_eq(other.inner.as_bytes()).into()
    }
}

impl Eq for SecretString {}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Deref for SecretString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.expose()
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}
