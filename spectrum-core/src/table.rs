use crate::messages::{TableField, TableUpdate};

pub const ROWS: usize = 4;
pub const CELLS_PER_ROW: usize = 4;
pub const CELL_COUNT: usize = ROWS * CELLS_PER_ROW;

/// Placeholder shown in a value cell before the first update.
pub const EMPTY_VALUE: &str = "-";

/// Text of the results table's `td` cells in document order.
///
/// Even positions carry field labels, odd positions the field values.
/// Updates address cells by position only.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsTable {
    cells: Vec<String>,
}

impl Default for ResultsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsTable {
    pub fn new() -> Self {
        let mut cells = vec![EMPTY_VALUE.to_string(); CELL_COUNT];
        for field in TableField::ALL {
            cells[field.label_position()] = field.label().to_string();
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, position: usize) -> Option<&str> {
        self.cells.get(position).map(String::as_str)
    }

    /// Field whose value lives at `position`, if any.
    pub fn field_at(position: usize) -> Option<TableField> {
        TableField::ALL.into_iter().find(|f| f.cell_position() == position)
    }

    /// Write every value present in `update`.
    pub fn apply(&mut self, update: &TableUpdate) {
        for (position, text) in update.cell_writes() {
            if let Some(cell) = self.cells.get_mut(position) {
                *cell = text;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::parse_table_update;

    #[test]
    fn test_new_table_layout() {
        let table = ResultsTable::new();
        assert_eq!(table.cells().len(), 16);
        assert_eq!(table.cells()[..CELLS_PER_ROW], ["Central frequency", "-", "Bandwidth", "-"]);
        assert_eq!(table.cells()[12..], ["SNR", "-", "Crest factor", "-"]);
    }

    #[test]
    fn test_apply_only_touches_odd_cells() {
        let mut table = ResultsTable::new();
        let before = table.clone();
        let update = parse_table_update(
            r#"{"central_frequency": 1, "bandwidth": 2, "noise_level": 3, "modulation": 4,
                "amplitude": 5, "spectral_peaks": 6, "snr": 7, "crest_factor": 8}"#,
        )
        .unwrap();
        table.apply(&update);

        for pos in 0..CELL_COUNT {
            if pos % 2 == 0 {
                assert_eq!(table.cell(pos), before.cell(pos), "label cell {pos} changed");
            } else {
                assert_eq!(table.cell(pos), Some(((pos + 1) / 2).to_string().as_str()));
            }
        }
    }

    #[test]
    fn test_missing_field_leaves_cell_untouched() {
        let mut table = ResultsTable::new();
        table.apply(&parse_table_update(r#"{"modulation": "PPM", "snr": 40}"#).unwrap());
        table.apply(&parse_table_update(r#"{"snr": 41}"#).unwrap());
        assert_eq!(table.cell(7), Some("PPM"));
        assert_eq!(table.cell(13), Some("41"));
        assert_eq!(table.cell(1), Some(EMPTY_VALUE));
    }

    #[test]
    fn test_null_field_clears_cell() {
        let mut table = ResultsTable::new();
        table.apply(&parse_table_update(r#"{"snr": 40}"#).unwrap());
        assert_eq!(table.cell(13), Some("40"));
        table.apply(&parse_table_update(r#"{"snr": null}"#).unwrap());
        assert_eq!(table.cell(13), Some(""));
        assert_eq!(table.cell(12), Some("SNR"));
    }

    #[test]
    fn test_field_at() {
        assert_eq!(ResultsTable::field_at(1), Some(TableField::CentralFrequency));
        assert_eq!(ResultsTable::field_at(15), Some(TableField::CrestFactor));
        assert_eq!(ResultsTable::field_at(2), None);
    }
}
