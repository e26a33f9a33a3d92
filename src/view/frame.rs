//! Display frame structure and its text/JSON renderings

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::TimeCard;

/// Shown in place of a time before any session exists
pub const TIME_PLACEHOLDER: &str = "--:--";

/// Fixed informational message under the progress bar
pub const INFO_MESSAGE: &str = "PEKERJAAN AKAN DI PROSES SECARA OTOMATIS. \
PENGGUNA HANYA PERLU MENUNGGU DI DALAM \"AKUN KERJA\" SAMPAI PROSES PEKERJAAN \
SELESAI SESUAI DENGAN WAKTU YANG DITENTUKAN OLEH SISTEM";

const BAR_WIDTH: usize = 30;
const MESSAGE_WIDTH: usize = 44;

/// Everything the display surface shows at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// Session start as HH:MM, or the placeholder
    pub start_time: String,
    /// Session end as HH:MM, or the placeholder
    pub end_time: String,
    /// Elapsed percentage, 0..=100
    pub progress: u8,
    pub message: String,
}

/// How frames are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Boxed terminal frame, redrawn in place
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl DisplayFrame {
    /// Render the frame for the given output format
    pub fn to_output(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }

    /// Draw the frame as plain text
    pub fn to_text(&self) -> String {
        let start = TimeCard::new("MULAI", &self.start_time).lines();
        let end = TimeCard::new("SELESAI", &self.end_time).lines();
        let joiners = ["   ", " ═ ", "   ", " ═ ", "   "];

        let mut out = String::new();
        out.push_str("WAKTU PEKERJAAN\n\n");
        for ((left, right), joiner) in start.iter().zip(end.iter()).zip(joiners) {
            out.push_str(left);
            out.push_str(joiner);
            out.push_str(right);
            out.push('\n');
        }

        let filled = usize::from(self.progress.min(100)) * BAR_WIDTH / 100;
        out.push('\n');
        out.push_str(&format!("PROSES KERJA {:>width$}%\n", self.progress, width = BAR_WIDTH - 12));
        out.push_str(&format!("[{}{}]\n\n", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled)));

        for line in wrap(&self.message, MESSAGE_WIDTH) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("\n[Enter] RESET ULANG\n");
        out
    }
}

/// Greedy word wrap
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
