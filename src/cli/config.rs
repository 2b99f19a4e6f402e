use crate::error::{LedgerError, Result};
use crate::settings::{load_settings, save_settings, settings_path};

pub fn run(horizon: Option<u32>, currency: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    let changed = horizon.is_some() || currency.is_some();

    if let Some(h) = horizon {
        if h == 0 {
            return Err(LedgerError::Settings("horizon must be at least 1 month".to_string()));
        }
        settings.default_horizon_months = h;
    }
    if let Some(c) = currency {
        settings.currency = c;
    }
    if changed {
        save_settings(&settings)?;
        println!("Settings saved to {}", settings_path().display());
    }

    println!("default_horizon_months = {}", settings.default_horizon_months);
    println!("currency = {}", settings.currency);
    Ok(())
}
