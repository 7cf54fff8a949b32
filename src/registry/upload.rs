//! Channel identity and upload payload types
//!
//! This module defines the name that identifies a channel and the payload
//! that is handed to subscribers on every notification.

/// Name identifying a publishing channel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelName(String);

impl ChannelName {
    /// Create a new channel name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ChannelName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Most recently published upload of a channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LatestUpload {
    /// Nothing has been published yet
    #[default]
    Nothing,
    /// Title of the last published video
    Title(String),
}

impl LatestUpload {
    /// Get the title, if anything was published
    pub fn title(&self) -> Option<&str> {
        match self {
            LatestUpload::Nothing => None,
            LatestUpload::Title(title) => Some(title),
        }
    }

    /// Check whether anything was published
    pub fn is_nothing(&self) -> bool {
        matches!(self, LatestUpload::Nothing)
    }
}

impl std::fmt::Display for LatestUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatestUpload::Nothing => f.write_str("<no uploads yet>"),
            LatestUpload::Title(title) => f.write_str(title),
        }
    }
}

/// Notification handed to each subscriber callback
///
/// Borrows from the channel, so it is only valid for the duration of the
/// callback.
#[derive(Debug, Clone, Copy)]
pub struct Notification<'a> {
    /// Channel that published the upload
    pub channel: &'a ChannelName,
    /// The published upload
    pub upload: &'a LatestUpload,
}

impl<'a> Notification<'a> {
    /// Create a notification
    pub fn new(channel: &'a ChannelName, upload: &'a LatestUpload) -> Self {
        Self { channel, upload }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_name() {
        let name = ChannelName::new("TechMaster");
        assert_eq!(name.as_str(), "TechMaster");
        assert_eq!(name.to_string(), "TechMaster");
        assert_eq!(ChannelName::from("TechMaster"), name);
    }

    #[test]
    fn test_latest_upload_sentinel() {
        let upload = LatestUpload::default();
        assert!(upload.is_nothing());
        assert_eq!(upload.title(), None);
        assert_eq!(upload.to_string(), "<no uploads yet>");
    }

    #[test]
    fn test_latest_upload_title() {
        let upload = LatestUpload::Title("Clean Code Principles in Python".into());
        assert!(!upload.is_nothing());
        assert_eq!(upload.title(), Some("Clean Code Principles in Python"));
        assert_eq!(upload.to_string(), "Clean Code Principles in Python");
    }
}
