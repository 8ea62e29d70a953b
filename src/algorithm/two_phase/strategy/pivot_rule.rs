//! # Pivot rules
//!
//! Strategies for selecting the variable that enters the basis. The rule determines how many
//! iterations are needed in practice and whether termination is guaranteed on degenerate
//! problems.
/// How the variable entering the basis is chosen.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PivotSelectionRule {
    /// Enter the column with the most negative reduced cost. Fast in practice, but can cycle on
    /// degenerate problems.
    #[default]
    Dantzig,
    /// Enter the lowest-index column with a negative reduced cost. Slower, but guarantees
    /// termination.
    Bland,
}
