use super::ui;
use crate::core::config::Wallet;
use crate::core::convert::{RECEIVE_SCALE, round_money};
use crate::core::price::{PriceSnapshot, PriceSource};
use crate::core::priority::PriorityTable;
use crate::core::sort_filter;
use anyhow::Result;
use comfy_table::Cell;
use console::style;
use rust_decimal::Decimal;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct BalanceRow {
    pub blockchain: String,
    pub currency: String,
    pub amount: Decimal,
    /// Balance valued in the reference currency, when a price is known.
    pub value: Option<Decimal>,
}

#[derive(Debug)]
pub struct WalletView {
    pub name: String,
    pub reference_currency: String,
    pub rows: Vec<BalanceRow>,
    /// Sum over all rows; absent when any row could not be valued.
    pub total_value: Option<Decimal>,
}

impl WalletView {
    pub fn display_as_table(&self) -> String {
        let reference_currency = &self.reference_currency;

        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Chain"),
            ui::header_cell("Token"),
            ui::header_cell("Amount"),
            ui::header_cell(&format!("Value ({reference_currency})")),
        ]);

        for row in &self.rows {
            let amount = ui::numeric_cell(&format!(
                "{:.2}",
                round_money(row.amount, RECEIVE_SCALE)
            ));
            let value = ui::format_optional_cell(row.value, |v| {
                format!("{:.2}", round_money(v, RECEIVE_SCALE))
            });

            table.add_row(vec![
                Cell::new(&row.blockchain),
                Cell::new(&row.currency),
                amount,
                value,
            ]);
        }

        let total_style_type = if self.total_value.is_some() {
            ui::StyleType::TotalValue
        } else {
            ui::StyleType::Error
        };
        let total_value = self
            .total_value
            .map_or("N/A".to_string(), |v| {
                format!("{:.2}", round_money(v, RECEIVE_SCALE))
            });

        // Wallet name at top
        let mut output = format!(
            "Wallet: {}\n\n",
            ui::style_text(&self.name, ui::StyleType::Title)
        );

        // Table in the middle
        output.push_str(&table.to_string());

        // Total value at bottom
        output.push_str(&format!(
            "\n\nTotal Value ({}): {}",
            ui::style_text(reference_currency, ui::StyleType::TotalLabel),
            ui::style_text(&total_value, total_style_type)
        ));

        output
    }
}

/// Ranks and values one wallet against a snapshot. Pure computation;
/// progress updates can be reported via the `update_callback`.
pub fn build_wallet_view(
    wallet: &Wallet,
    priorities: &PriorityTable,
    snapshot: &PriceSnapshot,
    reference_currency: &str,
    update_callback: &(dyn Fn()),
) -> WalletView {
    let kept = sort_filter(&wallet.balances, |chain| priorities.priority(chain));

    let mut rows = Vec::with_capacity(kept.len());
    let mut total_value = Some(Decimal::ZERO);
    for balance in kept {
        let value = snapshot.value_of(&balance.currency, balance.amount);
        if value.is_none() {
            debug!(
                "No usable price for {} in wallet {}",
                balance.currency, wallet.name
            );
        }
        total_value = match (total_value, value) {
            (Some(total), Some(value)) => total.checked_add(value),
            _ => None,
        };
        rows.push(BalanceRow {
            blockchain: balance.blockchain,
            currency: balance.currency,
            amount: balance.amount,
            value,
        });
        update_callback();
    }

    WalletView {
        name: wallet.name.clone(),
        reference_currency: reference_currency.to_string(),
        rows,
        total_value,
    }
}

pub async fn run(
    wallets: &[Wallet],
    source: &(dyn PriceSource + Send + Sync),
    priorities: &PriorityTable,
    reference_currency: &str,
) -> Result<()> {
    let snapshot = source.fetch_snapshot().await?;
    if snapshot.is_empty() {
        warn!("Price feed produced no usable prices; values will show as N/A");
    }

    let total_balances: u64 = wallets.iter().map(|w| w.balances.len()).sum::<usize>() as u64;
    let pb = ui::new_progress_bar(total_balances, true);
    pb.set_message("Valuing balances...");

    let views: Vec<WalletView> = wallets
        .iter()
        .map(|wallet| {
            build_wallet_view(wallet, priorities, &snapshot, reference_currency, &|| {
                pb.inc(1)
            })
        })
        .collect();
    pb.finish_and_clear();

    let mut grand_total = Some(Decimal::ZERO);
    let mut all_wallets_valid = true;
    for view in &views {
        match view.total_value {
            Some(value) => grand_total = grand_total.and_then(|t| t.checked_add(value)),
            None => all_wallets_valid = false,
        }
    }

    let num_views = views.len();
    for (i, view) in views.into_iter().enumerate() {
        println!("{}", view.display_as_table());
        if i + 1 < num_views {
            ui::print_separator();
        }
    }

    if let Some(grand_total) = grand_total.filter(|_| all_wallets_valid && num_views > 1) {
        let term_width = console::Term::stdout()
            .size_checked()
            .map(|(_, w)| w as usize)
            .unwrap_or(80);
        println!("\n{}", "=".repeat(term_width));
        let total_str = format!(
            "Grand Total ({reference_currency}): {:.2}",
            round_money(grand_total, RECEIVE_SCALE)
        );
        let styled_total = style(&total_str).bold().green();
        println!("{styled_total:>term_width$}");
    }

    Ok(())
}
