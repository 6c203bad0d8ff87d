use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Progress bars addressed by id. One bar is enough for the sweep, but the
/// manager keeps ids so export progress can be added next to it.
pub struct ProgressManager {
    mp: MultiProgress,
    bars: Arc<Mutex<HashMap<String, ProgressBar>>>,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            mp: MultiProgress::new(),
            bars: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn create_bar(
        &self,
        id: &str,
        total: u64,
        template: &str,
        message: &str,
    ) -> Result<(), String> {
        let mut bars = self
            .bars
            .lock()
            .map_err(|e| format!("Lock error: {}", e))?;

        if bars.contains_key(id) {
            return Err(format!("Progress bar '{}' already exists", id));
        }

        let pb = self.mp.add(ProgressBar::new(total));
        let style = ProgressStyle::default_bar()
            .template(template)
            .map_err(|e| format!("Bad progress template: {}", e))?
            .progress_chars("█▉▊▋▌▍▎▏ ");
        pb.set_style(style);
        pb.set_message(message.to_string());

        bars.insert(id.to_string(), pb);
        Ok(())
    }

    /// 增加进度条位置
    pub fn inc(&self, id: &str, value: u64) -> Result<(), String> {
        let bars = self
            .bars
            .lock()
            .map_err(|e| format!("Lock error: {}", e))?;
        if let Some(pb) = bars.get(id) {
            pb.inc(value);
            Ok(())
        } else {
            Err(format!("Progress bar '{}' not found", id))
        }
    }

    pub fn set_message(&self, id: &str, message: &str) -> Result<(), String> {
        let bars = self
            .bars
            .lock()
            .map_err(|e| format!("Lock error: {}", e))?;
        if let Some(pb) = bars.get(id) {
            pb.set_message(message.to_string());
            Ok(())
        } else {
            Err(format!("Progress bar '{}' not found", id))
        }
    }

    /// 完成所有进度条
    pub fn finish_all(&self) {
        if let Ok(mut bars) = self.bars.lock() {
            for (_, pb) in bars.drain() {
                pb.finish();
            }
        }
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

pub mod templates {
    pub const SWEEP: &str =
        "\u{f0e8} GEN  [{bar:30.cyan}] {percent}% ({pos}/{len} frequencies) {msg}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_bar_ids_are_rejected() {
        let manager = ProgressManager::new();
        manager
            .create_bar("sweep", 10, templates::SWEEP, "")
            .unwrap();
        assert!(
            manager
                .create_bar("sweep", 10, templates::SWEEP, "")
                .is_err()
        );
    }

    #[test]
    fn inc_on_unknown_bar_reports_the_id() {
        let manager = ProgressManager::new();
        let err = manager.inc("missing", 1).unwrap_err();
        assert!(err.contains("missing"));
    }
}
