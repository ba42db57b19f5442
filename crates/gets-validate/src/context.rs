use gets_map::find_mapped_source_column;
use gets_model::{CellValue, FieldMapping, Issue, Record, RuleName};

use crate::fault::RuleFault;

static NULL_CELL: CellValue = CellValue::Null;

/// One row plus the mapping used to locate its standard fields.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    /// 1-based.
    pub row_number: usize,
    pub row: &'a Record,
    pub mapping: &'a FieldMapping,
}

/// A standard field resolved to its source column and value.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub field: &'static str,
    pub column: &'a str,
    pub value: &'a CellValue,
}

impl<'a> RowContext<'a> {
    pub fn new(row_number: usize, row: &'a Record, mapping: &'a FieldMapping) -> Self {
        Self {
            row_number,
            row,
            mapping,
        }
    }

    /// Looks up the value for a standard field.
    ///
    /// `None` if no column maps to `field`. A mapped column missing from
    /// the row reads as null.
    pub fn resolve(&self, field: &'static str) -> Option<Resolved<'a>> {
        let column = find_mapped_source_column(field, self.mapping)?;
        let value = self.row.get(column).unwrap_or(&NULL_CELL);
        Some(Resolved {
            field,
            column,
            value,
        })
    }

    pub fn issue(&self, rule: RuleName, resolved: &Resolved<'_>, error: String) -> Issue {
        Issue {
            row: self.row_number,
            field: resolved.field.to_string(),
            source_field: resolved.column.to_string(),
            rule,
            error,
            value: resolved.value.clone(),
            expected: None,
            line: None,
        }
    }

    pub(crate) fn fault_issue(&self, rule: RuleName, fault: &RuleFault) -> Issue {
        Issue {
            row: self.row_number,
            field: String::new(),
            source_field: String::new(),
            rule,
            error: format!("Rule validation error: {fault}"),
            value: CellValue::Null,
            expected: None,
            line: None,
        }
    }
}

impl Resolved<'_> {
    /// Fails on line-item arrays, which no scalar rule can evaluate.
    pub fn scalar(&self) -> Result<&CellValue, RuleFault> {
        match self.value {
            CellValue::Lines(_) => Err(RuleFault::UnexpectedShape {
                field: self.field,
                column: self.column.to_string(),
                found: self.value.kind(),
            }),
            value => Ok(value),
        }
    }
}
