use std::fs;
use std::path::Path;

use log::debug;

use crate::error::StegaError;
use crate::result::Result;

/// The ordered recipients of a watermark batch, one identity per line of the list file.
///
/// The list is read once and only borrowed afterwards, every source image iterates it from
/// the start, so the identity index of a line is the same for all images of a batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IdentityList {
    identities: Vec<String>,
}

impl IdentityList {
    /// Splits `text` into lines, `\n` and `\r\n` both end a line. Blank lines stay in the
    /// list so that identity indices match line numbers.
    pub fn parse(text: &str) -> Self {
        text.lines().collect()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| StegaError::IdentityListError {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&text);
        debug!("Read {} identities from {path:?}", list.len());

        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.identities.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identities.iter().map(String::as_str)
    }

    /// index of the first identity equal to `text`
    pub fn position(&self, text: &str) -> Option<usize> {
        self.iter().position(|identity| identity == text)
    }
}

impl<S: Into<String>> FromIterator<S> for IdentityList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            identities: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// the bytes to hide for one identity, terminated by `sentinel`
pub fn identity_message(identity: &str, sentinel: u8) -> Vec<u8> {
    let mut message = Vec::with_capacity(identity.len() + 1);
    message.extend_from_slice(identity.as_bytes());
    message.push(sentinel);

    message
}
