use std::path::PathBuf;

/// Compile-time defaults for the dashboard window and its data source.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Data file, resolved against the working directory.
    pub data_file: PathBuf,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub side_panel_width: f32,
    pub line_chart_height: f32,
    pub bar_chart_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data.csv"),
            window_title: "Bike Sharing Dashboard".to_string(),
            inner_size: [1100.0, 850.0],
            min_inner_size: [640.0, 480.0],
            side_panel_width: 220.0,
            line_chart_height: 260.0,
            bar_chart_height: 260.0,
        }
    }
}

impl DashboardConfig {
    /// Absolute path of the data file. Falls back to the relative path when
    /// the working directory cannot be read.
    pub fn data_path(&self) -> PathBuf {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(&self.data_file),
            Err(e) => {
                log::warn!("cannot read working directory: {e}");
                self.data_file.clone()
            }
        }
    }
}
