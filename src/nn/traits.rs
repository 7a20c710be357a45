//! Tensor container handed to the search framework.

use serde::{Deserialize, Serialize};

/// Encoded observation as a flat tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor, `[channels, rows, cols]` for board planes.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Set element at a flat index.
    pub fn set(&mut self, index: usize, value: f32) {
        if index < self.tensor.len() {
            self.tensor[index] = value;
        }
    }

    /// Flat index of `(channel, pos)` for a `[channels, N, N]` tensor, where
    /// `pos` is a row-major cell index.
    #[must_use]
    pub fn plane_index(&self, channel: usize, pos: usize) -> usize {
        let plane = self.shape[1..].iter().product::<usize>();
        channel * plane + pos
    }

    /// One channel as a slice of `N²` values.
    #[must_use]
    pub fn plane(&self, channel: usize) -> &[f32] {
        let plane = self.shape[1..].iter().product::<usize>();
        &self.tensor[channel * plane..(channel + 1) * plane]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_state_new() {
        let state = EncodedState::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        assert_eq!(state.len(), 4);
        assert_eq!(state.shape, vec![2, 2]);
        assert_eq!(state.get(0), Some(1.0));
        assert_eq!(state.get(3), Some(4.0));
        assert_eq!(state.get(4), None);
    }

    #[test]
    fn test_encoded_state_zeros() {
        let state = EncodedState::zeros(vec![6, 5, 5]);
        assert_eq!(state.len(), 150);
        assert!(!state.is_empty());
        assert!(state.tensor.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_encoded_state_set_out_of_bounds() {
        let mut state = EncodedState::zeros(vec![3]);
        state.set(10, 5.0);
        assert!(state.tensor.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_plane_access() {
        let mut state = EncodedState::zeros(vec![3, 2, 2]);
        let index = state.plane_index(2, 1);
        state.set(index, 1.0);

        assert_eq!(index, 9);
        assert_eq!(state.plane(2), &[0.0, 1.0, 0.0, 0.0]);
        assert!(state.plane(0).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_serialization() {
        let state = EncodedState::new(vec![1.0, 2.0, 3.0], vec![3]);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EncodedState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
