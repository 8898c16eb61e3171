use crate::core::csv_log::CsvAppender;
use crate::core::{RateQuery, RateSource, Result};
use crate::utils::validation;
use std::io::{BufRead, Write};

/// Drives one interactive session: prompt, fetch, print, optionally persist.
pub struct Tracker<S: RateSource> {
    source: S,
    csv_log: CsvAppender,
}

impl<S: RateSource> Tracker<S> {
    pub fn new(source: S, csv_log: CsvAppender) -> Self {
        Self { source, csv_log }
    }

    /// Runs the session over the given console streams.
    ///
    /// Fetch errors are reported as a single `Hata:` line and end the run
    /// normally; CSV write errors propagate to the caller.
    pub async fn run<R, W>(&self, input: &mut R, output: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "=== Döviz Kuru Takip Programı ===")?;

        let base_line = prompt(input, output, "Kaynak para birimi (örn: USD, EUR, TRY): ")?;
        let symbols_line = prompt(input, output, "Hedef para(lar) virgüllü (örn: TRY,EUR,GBP): ")?;
        let query = RateQuery::from_input(&base_line, &symbols_line);

        if !validation::is_currency_code(&query.base) {
            tracing::warn!("Base '{}' does not look like an ISO currency code", query.base);
        }
        tracing::info!("Fetching {} against {:?}", query.base, query.symbols);

        let result = match self.source.fetch_rate(&query).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Fetch failed: {}", e);
                writeln!(output, "Hata: {}", e)?;
                return Ok(());
            }
        };

        writeln!(output)?;
        writeln!(
            output,
            "Tarih: {} | Baz: {}",
            result.date.as_deref().unwrap_or("-"),
            result.base
        )?;
        for (symbol, rate) in &result.rates {
            writeln!(output, "  1 {} = {:.4} {}", result.base, rate, symbol)?;
        }

        writeln!(output)?;
        let save = prompt(input, output, "CSV'ye kaydedilsin mi? (e/h): ")?;
        if save.eq_ignore_ascii_case("e") {
            self.csv_log
                .append(&result.base, &result.rates, result.date.as_deref())?;
            tracing::info!("Saved {} rows", result.rates.len());
            writeln!(output, "💾 Kaydedildi: {}", self.csv_log.path().display())?;
        }

        Ok(())
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<String> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
