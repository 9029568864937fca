//! Property tests for loading and transposing configuration grids

use fieldconfigs_core::{CellValue, ConfigTable, LoadOptions, SheetGrid};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Empty),
        "[a-z ]{1,8}".prop_map(CellValue::Text),
        (-1.0e6f64..1.0e6).prop_map(CellValue::Number),
        any::<bool>().prop_map(CellValue::Boolean),
    ]
}

/// Header row plus up to 45 uniquely named records
fn config_grid() -> impl Strategy<Value = (usize, usize, SheetGrid)> {
    (1usize..8, 1usize..=45).prop_flat_map(|(cols, rows)| {
        proptest::collection::vec(proptest::collection::vec(cell(), cols), rows).prop_map(
            move |body| {
                let mut grid = SheetGrid::new();
                grid.set(0, 0, "Name");
                for c in 0..cols {
                    grid.set(0, (c + 1) as u16, format!("field{}", c));
                }
                for (r, values) in body.into_iter().enumerate() {
                    grid.set((r + 1) as u32, 0, format!("cfg{}", r));
                    for (c, v) in values.into_iter().enumerate() {
                        grid.set((r + 1) as u32, (c + 1) as u16, v);
                    }
                }
                (cols, rows, grid)
            },
        )
    })
}

proptest! {
    #[test]
    fn transpose_preserves_every_cell((cols, rows, grid) in config_grid()) {
        let table = ConfigTable::from_grid(&grid, &LoadOptions::default()).unwrap();
        prop_assert_eq!(table.len(), rows);
        prop_assert_eq!(table.columns().len(), cols);

        let transposed = table.transpose();
        prop_assert_eq!(transposed.headers().len(), rows);
        prop_assert_eq!(transposed.rows().len(), cols);

        for record in table.records() {
            for column in table.columns() {
                prop_assert_eq!(
                    table.value(record.name(), column),
                    transposed.value(column, record.name())
                );
            }
        }
    }

    #[test]
    fn loaded_values_match_grid((cols, rows, grid) in config_grid()) {
        let table = ConfigTable::from_grid(&grid, &LoadOptions::default()).unwrap();
        for r in 0..rows {
            for c in 0..cols {
                let name = format!("cfg{}", r);
                let column = format!("field{}", c);
                prop_assert_eq!(table.value(&name, &column), Some(grid.get(r + 1, c + 1)));
            }
        }
    }
}
