//! Request State
//!
//! Tagged state of one async operation as seen by a component.

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    /// User-facing message
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mut state: RequestState<Vec<u32>> = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        assert!(state.value().is_none());

        state = RequestState::Pending;
        assert!(state.value_mut().is_none());

        state = RequestState::Succeeded(vec![1]);
        state.value_mut().unwrap().push(2);
        assert_eq!(state.value(), Some(&vec![1, 2]));

        state = RequestState::Failed("boom".into());
        assert!(state.value().is_none());
    }
}
