//! Property tests for snapshot encoding

use fieldconfigs::{read_snapshot, write_snapshot, CellValue, ConfigRecord, ConfigTable};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Empty),
        "\\PC{0,12}".prop_map(CellValue::Text),
        any::<f64>()
            .prop_filter("finite", |n| n.is_finite())
            .prop_map(CellValue::Number),
        any::<bool>().prop_map(CellValue::Boolean),
    ]
}

fn config_table() -> impl Strategy<Value = ConfigTable> {
    (0usize..8, 0usize..=45).prop_flat_map(|(cols, rows)| {
        proptest::collection::vec(proptest::collection::vec(cell(), cols), rows).prop_map(
            move |body| {
                let columns = (0..cols).map(|c| format!("field{}", c)).collect();
                let records = body
                    .into_iter()
                    .enumerate()
                    .map(|(r, values)| ConfigRecord::new(format!("cfg{}", r), values))
                    .collect();
                ConfigTable::new("Name", columns, records).unwrap()
            },
        )
    })
}

proptest! {
    #[test]
    fn snapshot_reloads_equal_table(table in config_table()) {
        let mut bytes = Vec::new();
        write_snapshot(&table, &mut bytes).unwrap();
        prop_assert_eq!(read_snapshot(bytes.as_slice()).unwrap(), table);
    }

    #[test]
    fn snapshot_keeps_number_bits(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        let table = ConfigTable::new(
            "Name",
            vec!["Depth".into()],
            vec![ConfigRecord::new("A", vec![CellValue::Number(n)])],
        )
        .unwrap();

        let mut bytes = Vec::new();
        write_snapshot(&table, &mut bytes).unwrap();
        let reloaded = read_snapshot(bytes.as_slice()).unwrap();

        match reloaded.value("A", "Depth") {
            Some(CellValue::Number(m)) => prop_assert_eq!(m.to_bits(), n.to_bits()),
            other => prop_assert!(false, "expected a number, got {:?}", other),
        }
    }
}
