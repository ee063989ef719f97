/// Source of the current navigation path.
pub(crate) trait PathProvider {
    fn current_path(&self) -> &str;
}

/// Client-side navigator holding the current route path.
#[derive(Debug, Clone)]
pub(crate) struct Navigator {
    current: String,
}

impl Navigator {
    pub(crate) fn new(start_path: impl Into<String>) -> Self {
        Self {
            current: start_path.into(),
        }
    }

    /// Move to `href`. Returns `false` when already there.
    pub(crate) fn navigate(&mut self, href: &str) -> bool {
        if self.current == href {
            return false;
        }

        self.current.clear();
        self.current.push_str(href);
        true
    }
}

impl PathProvider for Navigator {
    fn current_path(&self) -> &str {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::{Navigator, PathProvider};

    #[test]
    fn given_new_path_when_navigating_then_current_path_changes() {
        let mut navigator = Navigator::new("/admin");

        assert!(navigator.navigate("/client"));
        assert_eq!(navigator.current_path(), "/client");
    }

    #[test]
    fn given_same_path_when_navigating_then_reports_no_change() {
        let mut navigator = Navigator::new("/client");

        assert!(!navigator.navigate("/client"));
        assert_eq!(navigator.current_path(), "/client");
    }
}
