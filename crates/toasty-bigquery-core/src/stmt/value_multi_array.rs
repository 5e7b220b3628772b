use super::Value;

/// A rectangular array with more than one dimension.
///
/// Items are stored in row-major order. BigQuery cannot store these; the type
/// exists so that callers can hand one to the literal generator and receive a
/// proper error instead of a silently flattened array.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueMultiArray {
    pub lengths: Vec<usize>,
    pub items: Vec<Value>,
}

impl ValueMultiArray {
    pub fn new(lengths: Vec<usize>, items: Vec<Value>) -> ValueMultiArray {
        debug_assert_eq!(lengths.iter().product::<usize>(), items.len());
        ValueMultiArray { lengths, items }
    }

    pub fn rank(&self) -> usize {
        self.lengths.len()
    }
}
