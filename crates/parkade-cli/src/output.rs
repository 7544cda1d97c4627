//! Output formatting module

use parkade_app::app::ScenarioReport;
use parkade_domain::model::PoolOccupancy;
use parkade_domain::service::BillingStrategy;
use parkade_types::{Fee, OutputFormat, Result, Timestamp};
use serde::Serialize;

#[derive(Serialize)]
struct FeeQuote {
    billing: BillingStrategy,
    entry_time: Timestamp,
    exit_time: Timestamp,
    fee: Fee,
}

pub fn output_report(output_format: OutputFormat, report: &ScenarioReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nReceipts");
    println!("========");
    if report.receipts.is_empty() {
        println!("(none)");
    } else {
        println!(
            "{:<8} {:<14} {:<6} {:>5} {:>7} {:>7} {:>6} {:<7} {:>8}",
            "Ticket", "Plate", "Type", "Spot", "Entry", "Exit", "Hours", "Billing", "Fee"
        );
        println!("{}", "-".repeat(78));
        for r in &report.receipts {
            println!(
                "{:<8} {:<14} {:<6} {:>5} {:>7} {:>7} {:>6} {:<7} {:>8}",
                r.ticket.to_string(),
                truncate_str(&r.plate, 14),
                r.category.label(),
                r.spot.to_string(),
                r.entry_time,
                r.exit_time,
                r.hours_parked(),
                r.billing.to_string(),
                r.fee
            );
        }
        println!("{}", "-".repeat(78));
        println!("{:>70} {:>7}", "Total:", report.total_fees());
    }

    if !report.rejections.is_empty() {
        println!("\nRejected events");
        println!("===============");
        for r in &report.rejections {
            println!(
                "  step {:>3}  {:<14} t={:<6} {}",
                r.step,
                truncate_str(&r.plate, 14),
                r.time,
                r.reason
            );
        }
    }

    if !report.still_parked.is_empty() {
        println!("\nStill parked");
        println!("============");
        for p in &report.still_parked {
            println!(
                "  {} {:<14} {:<6} spot {:<5} since t={}",
                p.ticket,
                truncate_str(&p.plate, 14),
                p.category.label(),
                p.spot.to_string(),
                p.entry_time
            );
        }
    }

    print_occupancy(&report.occupancy);
    Ok(())
}

fn print_occupancy(occupancy: &[PoolOccupancy]) {
    println!("\nOccupancy");
    println!("=========");
    for o in occupancy {
        println!(
            "  {:<6} {:>4} / {:<4} occupied ({} free)",
            o.category.label(),
            o.occupied,
            o.capacity,
            o.free()
        );
    }
}

pub fn output_fee(
    output_format: OutputFormat,
    billing: BillingStrategy,
    entry_time: Timestamp,
    exit_time: Timestamp,
    fee: Fee,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let quote = FeeQuote {
            billing,
            entry_time,
            exit_time,
            fee,
        };
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("Billing: {}", billing);
        println!("Stay:    t={} -> t={}", entry_time, exit_time);
        println!("Fee:     {}", fee);
    }
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
