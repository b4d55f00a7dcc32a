//! Interactive form session: two panels, line-command driven.
//!
//! Handles:
//! - Switching between the "Lot Size" and "Calculator" panels
//! - Editing, locking, and stepping field values
//! - Running a calculation and showing its result block
//! - Triggering the celebration overlay after a successful calculation

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::form::{LotSizePanel, ProfitLossPanel};
use crate::overlay::{Overlay, OverlayConfig};

/// Which panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelTab {
    LotSize,
    Calculator,
}

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Whether successful calculations trigger the overlay
    pub celebrate: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { celebrate: true }
    }
}

/// Interactive two-panel form.
pub struct FormSession {
    config: SessionConfig,
    lot_panel: LotSizePanel,
    pnl_panel: ProfitLossPanel,
    active: PanelTab,
    lot_overlay: Overlay,
    pnl_overlay: Overlay,
}

impl FormSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            lot_panel: LotSizePanel::new(),
            pnl_panel: ProfitLossPanel::new(),
            active: PanelTab::LotSize,
            lot_overlay: Overlay::new(OverlayConfig::default()),
            pnl_overlay: Overlay::new(OverlayConfig::profit()),
        }
    }

    /// Run the session until EOF, `quit`, or Ctrl+C.
    pub async fn run(&mut self) -> Result<()> {
        println!("=== pipcalc ===");
        println!("Panels: [lot] Lot Size, [calc] Calculator. Type 'help' for commands.\n");
        self.render();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            self.prompt()?;

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    println!("\nBye.");
                    break;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if !self.handle_command(line.trim()) {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn prompt(&self) -> Result<()> {
        let tab = match self.active {
            PanelTab::LotSize => "lot",
            PanelTab::Calculator => "calc",
        };
        print!("[{} {}] > ", chrono::Local::now().format("%H:%M:%S"), tab);
        std::io::stdout().flush()?;
        Ok(())
    }

    /// Dispatch one command line. Returns false when the session should end.
    fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.splitn(3, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let arg1 = parts.next();
        let arg2 = parts.next();

        match command {
            "" => {}
            "quit" | "exit" | "q" => return false,
            "help" | "?" => self.print_help(),
            "show" => self.render(),
            "tab" => {
                self.active = match self.active {
                    PanelTab::LotSize => PanelTab::Calculator,
                    PanelTab::Calculator => PanelTab::LotSize,
                };
                self.render();
            }
            "lot" => {
                self.active = PanelTab::LotSize;
                self.render();
            }
            "calc" => {
                self.active = PanelTab::Calculator;
                self.render();
            }
            "set" => match (arg1, arg2) {
                (Some(key), Some(value)) => self.set_field(key, value),
                _ => println!("Usage: set <field> <value>"),
            },
            "lock" => match arg1 {
                Some(key) => self.toggle_lock(key),
                None => println!("Usage: lock <field>"),
            },
            "+" | "-" => match arg1 {
                Some(key) => self.adjust_field(key, command == "+"),
                None => println!("Usage: {} <field>", command),
            },
            "go" => self.calculate(),
            other => println!("Unknown command '{}'. Type 'help' for commands.", other),
        }

        true
    }

    fn active_fields(&mut self) -> &mut crate::form::FieldSet {
        match self.active {
            PanelTab::LotSize => &mut self.lot_panel.fields,
            PanelTab::Calculator => &mut self.pnl_panel.fields,
        }
    }

    fn set_field(&mut self, key: &str, value: &str) {
        let fields = self.active_fields();
        if fields.is_locked(key) {
            println!("Field '{}' is locked. Unlock it first with: lock {}", key, key);
        } else if !fields.set(key, value.to_string()) {
            println!("No field '{}' on this panel.", key);
        } else {
            self.render();
        }
    }

    fn toggle_lock(&mut self, key: &str) {
        match self.active_fields().toggle_lock(key) {
            Some(true) => println!("Locked '{}'.", key),
            Some(false) => println!("Unlocked '{}'.", key),
            None => println!("No field '{}' on this panel.", key),
        }
    }

    fn adjust_field(&mut self, key: &str, increment: bool) {
        if self.active != PanelTab::Calculator {
            println!("Stepping is only available on the Calculator panel.");
            return;
        }
        match self.pnl_panel.adjust(key, increment) {
            Some(value) => println!("{} = {}", key, value),
            None => println!("Cannot step '{}' (unknown or locked).", key),
        }
    }

    /// Run the active panel's calculation. A panel with missing input skips
    /// silently, matching the form's do-nothing-on-empty behavior.
    fn calculate(&mut self) {
        match self.active {
            PanelTab::LotSize => {
                if let Some(report) = self.lot_panel.calculate() {
                    println!("\n  {}\n", report);
                    if self.config.celebrate {
                        let _ = self.lot_overlay.trigger();
                    }
                } else {
                    debug!("Lot size calculation skipped: incomplete input");
                }
            }
            PanelTab::Calculator => {
                if let Some(report) = self.pnl_panel.calculate() {
                    println!("\n{}\n", indent(&report.to_string()));
                    if self.config.celebrate {
                        let _ = self.pnl_overlay.trigger();
                    }
                } else {
                    debug!("Profit/loss projection skipped: incomplete input");
                }
            }
        }
    }

    fn render(&self) {
        match self.active {
            PanelTab::LotSize => {
                println!("\n--- 💎 Lot Size 💎 ---");
                for field in self.lot_panel.fields.iter() {
                    let lock = if self.lot_panel.fields.is_locked(field.key) {
                        " 🔒"
                    } else {
                        ""
                    };
                    println!("  {:<18} [{}] = {}{}", field.label, field.key, field.value, lock);
                }
                if let Some(report) = &self.lot_panel.last_result {
                    println!("  {}", report);
                }
            }
            PanelTab::Calculator => {
                println!("\n--- 🦍 Calculator 🦍 ---");
                for field in self.pnl_panel.fields.iter() {
                    let steppable = if crate::form::profit_loss::ADJUSTABLE.contains(&field.key) {
                        " (+/-)"
                    } else {
                        ""
                    };
                    let lock = if self.pnl_panel.fields.is_locked(field.key) {
                        " 🔒"
                    } else {
                        ""
                    };
                    println!(
                        "  {:<18} [{}] = {}{}{}",
                        field.label, field.key, field.value, steppable, lock
                    );
                }
                if let Some(report) = &self.pnl_panel.last_result {
                    println!("{}", indent(&report.to_string()));
                }
            }
        }
        println!();
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  lot | calc | tab       switch panel");
        println!("  show                   redraw the active panel");
        println!("  set <field> <value>    edit a field");
        println!("  lock <field>           toggle the lock on a field");
        println!("  + <field> | - <field>  step a price field (Calculator panel)");
        println!("  go                     calculate");
        println!("  quit                   leave");
    }
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|l| format!("  {}", l))
        .collect::<Vec<_>>()
        .join("\n")
}
