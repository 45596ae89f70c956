//! Frontend Models
//!
//! To-do records and the priority values used for styling and filtering.

use std::str::FromStr;

/// Item priority, drives row colour and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// All priorities in display order
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Value used in `<select>` options
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::Low => "priority-low",
            Priority::Medium => "priority-medium",
            Priority::High => "priority-high",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {other:?}")),
        }
    }
}

/// View filter over the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// `All` followed by one filter per priority
    pub const ALL: [PriorityFilter; 4] = [
        PriorityFilter::All,
        PriorityFilter::Only(Priority::Low),
        PriorityFilter::Only(Priority::Medium),
        PriorityFilter::Only(Priority::High),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityFilter::All => "all",
            PriorityFilter::Only(p) => p.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityFilter::All => "All",
            PriorityFilter::Only(p) => p.label(),
        }
    }

    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => *p == priority,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(PriorityFilter::All);
        }
        s.parse::<Priority>()
            .map(PriorityFilter::Only)
            .map_err(|_| format!("unknown filter: {s:?}"))
    }
}

/// A single to-do record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
}

impl Todo {
    pub fn new(id: u32, text: String, priority: Priority) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_values() {
        for p in Priority::ALL {
            assert_eq!(p.as_str().parse::<Priority>(), Ok(p));
        }
        assert_eq!(Priority::default(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
        assert!("High".parse::<Priority>().is_err());
    }

    #[test]
    fn test_filter_values() {
        assert_eq!("all".parse::<PriorityFilter>(), Ok(PriorityFilter::All));
        assert_eq!(
            "medium".parse::<PriorityFilter>(),
            Ok(PriorityFilter::Only(Priority::Medium))
        );
        assert_eq!(
            "none".parse::<PriorityFilter>(),
            Err("unknown filter: \"none\"".to_string())
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(PriorityFilter::All.matches(Priority::High));
        assert!(PriorityFilter::Only(Priority::Low).matches(Priority::Low));
        assert!(!PriorityFilter::Only(Priority::Low).matches(Priority::High));
    }

    #[test]
    fn test_new_todo_is_open() {
        let todo = Todo::new(1, "Buy milk".to_string(), Priority::High);
        assert!(!todo.completed);
        assert_eq!(todo.priority, Priority::High);
    }
}
