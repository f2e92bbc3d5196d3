//! Screen stack.
//!
//! The entry screen is the root and stays mounted for the life of the app.
//! A results screen is pushed on submit and popped on back; its search term
//! travels as the one navigation parameter.

/// Parameters carried from the entry screen to a results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Entry,
    Results { params: SearchParams },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Entry],
        }
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop the top route. The root is never popped.
    pub fn pop(&mut self) -> Option<Route> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> &Route {
        static ROOT: Route = Route::Entry;
        // The stack always holds the root
        self.stack.last().unwrap_or(&ROOT)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }
}
