//! Calculator state: two digits, an operator, the selected field and
//! the blink cursor.
//!
//! All mutation goes through the methods here so the digit and index
//! ranges hold at all times.

use crate::calc;
use crate::config::{INITIAL_FIRST, INITIAL_OPERATOR, INITIAL_SECOND};
use crate::ui::input_logic::{wrap_next, wrap_prev};

/// Number of values an operand can take (0-9).
pub const DIGIT_COUNT: u8 = 10;

/// Editable fields, in the order SELECT cycles through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// First operand.
    First,
    Operator,
    /// Second operand.
    Second,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::First, Field::Operator, Field::Second];

    pub const fn index(self) -> u8 {
        match self {
            Field::First => 0,
            Field::Operator => 1,
            Field::Second => 2,
        }
    }

    /// Field at `index`, wrapping modulo the field count.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % Self::ALL.len() as u8) as usize]
    }

    pub fn next(self) -> Self {
        Self::from_index(wrap_next(self.index(), Self::ALL.len() as u8))
    }
}

/// Supported operators, in cycling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    /// Character shown on the display.
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.symbol() == symbol)
    }

    pub const fn index(self) -> u8 {
        match self {
            Operator::Add => 0,
            Operator::Subtract => 1,
            Operator::Multiply => 2,
            Operator::Divide => 3,
            Operator::Power => 4,
        }
    }

    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % Self::ALL.len() as u8) as usize]
    }

    pub fn next(self) -> Self {
        Self::from_index(wrap_next(self.index(), Self::ALL.len() as u8))
    }

    pub fn prev(self) -> Self {
        Self::from_index(wrap_prev(self.index(), Self::ALL.len() as u8))
    }
}

/// Everything the display and indicator are derived from.
///
/// The result is not stored; [`CalcState::result`] recomputes it so it
/// can never go stale.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalcState {
    first: u8,
    operator: Operator,
    second: u8,
    field: Field,
    cursor_visible: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new(INITIAL_FIRST, INITIAL_OPERATOR, INITIAL_SECOND)
    }
}

impl CalcState {
    /// Build a state with the first field selected and the cursor shown.
    /// Operands are reduced modulo 10.
    pub fn new(first: u8, operator: Operator, second: u8) -> Self {
        Self {
            first: first % DIGIT_COUNT,
            operator,
            second: second % DIGIT_COUNT,
            field: Field::First,
            cursor_visible: true,
        }
    }

    pub fn first(&self) -> u8 {
        self.first
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn result(&self) -> f32 {
        calc::compute(self.first, self.operator, self.second)
    }

    /// SELECT: move to the next field.
    pub fn select_next(&mut self) {
        self.field = self.field.next();
    }

    /// UP: bump the selected field.
    pub fn increase(&mut self) {
        match self.field {
            Field::First => self.first = wrap_next(self.first, DIGIT_COUNT),
            Field::Operator => self.operator = self.operator.next(),
            Field::Second => self.second = wrap_next(self.second, DIGIT_COUNT),
        }
    }

    /// DOWN: lower the selected field.
    pub fn decrease(&mut self) {
        match self.field {
            Field::First => self.first = wrap_prev(self.first, DIGIT_COUNT),
            Field::Operator => self.operator = self.operator.prev(),
            Field::Second => self.second = wrap_prev(self.second, DIGIT_COUNT),
        }
    }

    /// Blink tick. Leaves every other field alone.
    pub fn toggle_cursor(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_power_on() {
        let s = CalcState::default();
        assert_eq!(s.first(), 1);
        assert_eq!(s.operator(), Operator::Add);
        assert_eq!(s.second(), 1);
        assert_eq!(s.field(), Field::First);
        assert!(s.cursor_visible());
        assert_eq!(s.result(), 2.0);
    }

    #[test]
    fn new_reduces_operands() {
        let s = CalcState::new(12, Operator::Power, 27);
        assert_eq!(s.first(), 2);
        assert_eq!(s.second(), 7);
    }

    #[test]
    fn field_cycle_wraps_after_three() {
        let mut s = CalcState::default();
        s.select_next();
        assert_eq!(s.field(), Field::Operator);
        s.select_next();
        assert_eq!(s.field(), Field::Second);
        s.select_next();
        assert_eq!(s.field(), Field::First);
    }

    #[test]
    fn first_operand_wraps_both_ways() {
        let mut s = CalcState::new(9, Operator::Add, 0);
        s.increase();
        assert_eq!(s.first(), 0);
        s.decrease();
        assert_eq!(s.first(), 9);
    }

    #[test]
    fn second_operand_wraps_both_ways() {
        let mut s = CalcState::new(0, Operator::Add, 0);
        s.select_next();
        s.select_next();
        s.decrease();
        assert_eq!(s.second(), 9);
        s.increase();
        assert_eq!(s.second(), 0);
        assert_eq!(s.first(), 0);
    }

    #[test]
    fn operator_cycles_through_all_five() {
        let mut s = CalcState::default();
        s.select_next();
        let mut seen = [' '; 5];
        for slot in seen.iter_mut() {
            *slot = s.operator().symbol();
            s.increase();
        }
        assert_eq!(seen, ['+', '-', '*', '/', '^']);
        assert_eq!(s.operator(), Operator::Add);
    }

    #[test]
    fn operator_decrease_wraps_to_power() {
        let mut s = CalcState::default();
        s.select_next();
        s.decrease();
        assert_eq!(s.operator(), Operator::Power);
        assert_eq!(s.first(), 1);
        assert_eq!(s.second(), 1);
    }

    #[test]
    fn toggle_cursor_touches_nothing_else() {
        let mut s = CalcState::new(4, Operator::Divide, 2);
        s.select_next();
        let before = s.clone();
        s.toggle_cursor();
        assert!(!s.cursor_visible());
        s.toggle_cursor();
        assert_eq!(s, before);
    }

    #[test]
    fn symbol_lookup() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('%'), None);
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Operator::from_index(5), Operator::Add);
        assert_eq!(Field::from_index(4), Field::Operator);
    }
}
