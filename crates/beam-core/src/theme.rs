//! Process-wide light/dark theme with explicit subscribe/notify.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct ThemePublisher {
    theme: Theme,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(Theme)>)>,
}

impl ThemePublisher {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Register `f` for future changes. It is not called with the current value.
    pub fn subscribe(&mut self, f: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Set the theme, notifying subscribers only if it changed.
    pub fn set(&mut self, theme: Theme) -> bool {
        if theme == self.theme {
            return false;
        }
        self.theme = theme;
        for (_, f) in &mut self.subscribers {
            f(theme);
        }
        true
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set(next);
        next
    }
}

impl Default for ThemePublisher {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
