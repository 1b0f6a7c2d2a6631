//! Structured comment label for threaded review deployments.
//!
//! The controller never looks inside a label; this is simply a ready-made
//! label type whose JSON shape matches what comment-style hosts exchange.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub user: String,
    pub reply: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub user: String,
    /// Host-formatted timestamp, empty until first written.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub reply: Vec<Reply>,
}

impl Comment {
    pub fn new(comment: impl Into<String>, user: impl Into<String>, time: impl Into<String>) -> Self {
        Comment {
            comment: comment.into(),
            user: user.into(),
            time: time.into(),
            reply: Vec::new(),
        }
    }

    /// Overwrite text, author and time, but only when the text differs.
    /// Returns whether anything changed.
    pub fn set_comment(&mut self, text: &str, user: &str, time: &str) -> bool {
        if self.comment == text {
            return false;
        }
        self.comment = text.to_string();
        self.user = user.to_string();
        self.time = time.to_string();
        true
    }

    /// Replace the reply at `index`, or append when `index` is past the end.
    pub fn set_reply(&mut self, index: usize, user: &str, reply: &str) {
        match self.reply.get_mut(index) {
            Some(r) => r.reply = reply.to_string(),
            None => self.reply.push(Reply {
                user: user.to_string(),
                reply: reply.to_string(),
            }),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.comment.is_empty() && self.reply.is_empty()
    }
}
