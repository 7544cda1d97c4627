//! CSV export of closed-ticket receipts

use std::fs::File;
use std::io::Write;
use std::path::Path;

use parkade_domain::model::Receipt;
use parkade_types::{Error, Result};

/// Write receipts to `path`, one row per ticket, with a header row
pub fn write_receipts<P: AsRef<Path>>(path: P, receipts: &[Receipt]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_receipts_to(file, receipts)
}

pub fn write_receipts_to<W: Write>(writer: W, receipts: &[Receipt]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for receipt in receipts {
        writer
            .serialize(receipt)
            .map_err(|e| Error::Csv(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkade_types::{BillingKind, SpotId, TicketNumber, VehicleCategory};

    fn receipt() -> Receipt {
        Receipt {
            ticket: TicketNumber(1),
            plate: "KA-01-1234".to_string(),
            category: VehicleCategory::Car,
            spot: SpotId(1),
            entry_time: 1,
            exit_time: 4,
            billing: BillingKind::Hourly,
            fee: 30,
        }
    }

    #[test]
    fn test_write_receipts_to_buffer() {
        let mut buffer = Vec::new();
        write_receipts_to(&mut buffer, &[receipt()]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("ticket,plate,category,spot,entry_time,exit_time,billing,fee")
        );
        assert_eq!(lines.next(), Some("1,KA-01-1234,car,1,1,4,hourly,30"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_receipts_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipts.csv");
        write_receipts(&path, &[receipt()]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<Receipt> = reader.deserialize().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(rows, vec![receipt()]);
    }
}
