use egui_plot::{HLine, Legend, Line, Plot, PlotPoints};
use tt_app::{IntegratorType, RunResult, Scenario, run_scenario};

pub struct TankthermApp {
    scenario: Scenario,
    use_off_window: bool,
    off_start_s: f64,
    off_end_s: f64,
    result: Option<RunResult>,
    last_error: Option<String>,
}

impl TankthermApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let scenario = Scenario::default();
        let off_start_s = scenario.heater_off_start_s.unwrap_or(900.0);
        let off_end_s = scenario.heater_off_end_s.unwrap_or(1200.0);
        let mut app = Self {
            use_off_window: scenario.heater_off_start_s.is_some(),
            off_start_s,
            off_end_s,
            scenario,
            result: None,
            last_error: None,
        };
        app.run();
        app
    }

    fn run(&mut self) {
        if self.use_off_window {
            self.scenario.heater_off_start_s = Some(self.off_start_s);
            self.scenario.heater_off_end_s = Some(self.off_end_s);
        } else {
            self.scenario.heater_off_start_s = None;
            self.scenario.heater_off_end_s = None;
        }

        match run_scenario(&self.scenario, IntegratorType::RK4) {
            Ok(result) => {
                self.result = Some(result);
                self.last_error = None;
            }
            Err(e) => {
                self.result = None;
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn show_parameter_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Scenario");
        ui.separator();

        egui::Grid::new("scenario_params")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Heater power (W)");
                ui.add(egui::DragValue::new(&mut self.scenario.heater_full_power_w).speed(50.0));
                ui.end_row();

                ui.label("Loss coeff (W/°C)");
                ui.add(egui::DragValue::new(&mut self.scenario.loss_coeff_w_per_c).speed(0.5));
                ui.end_row();

                ui.label("Specific heat (J/kg°C)");
                ui.add(egui::DragValue::new(&mut self.scenario.specific_heat_j_per_kg_c).speed(10.0));
                ui.end_row();

                ui.label("Density (kg/m³)");
                ui.add(egui::DragValue::new(&mut self.scenario.density_kg_m3).speed(10.0));
                ui.end_row();

                ui.label("Volume (m³)");
                ui.add(egui::DragValue::new(&mut self.scenario.volume_m3).speed(0.01));
                ui.end_row();

                ui.label("Ambient temp (°C)");
                ui.add(egui::DragValue::new(&mut self.scenario.ambient_temp_c).speed(0.5));
                ui.end_row();

                ui.label("Initial temp (°C)");
                ui.add(egui::DragValue::new(&mut self.scenario.initial_temp_c).speed(0.5));
                ui.end_row();

                ui.label("Samples");
                ui.add(egui::DragValue::new(&mut self.scenario.sample_count).range(2..=100_000));
                ui.end_row();

                ui.label("Duration (s)");
                ui.add(egui::DragValue::new(&mut self.scenario.duration_s).speed(10.0));
                ui.end_row();
            });

        ui.separator();
        ui.checkbox(&mut self.use_off_window, "Heater off-window");
        if self.use_off_window {
            egui::Grid::new("off_window")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Off from (s)");
                    ui.add(egui::DragValue::new(&mut self.off_start_s).speed(10.0));
                    ui.end_row();

                    ui.label("Back on at (s)");
                    ui.add(egui::DragValue::new(&mut self.off_end_s).speed(10.0));
                    ui.end_row();
                });
        }

        ui.separator();
        if ui.button("Run simulation").clicked() {
            self.run();
        }

        if let Some(err) = &self.last_error {
            ui.separator();
            ui.colored_label(egui::Color32::LIGHT_RED, err);
        }

        if let Some(result) = &self.result {
            ui.separator();
            let s = &result.summary;
            ui.label(format!("Final: {:.2} °C", s.final_temp_c));
            ui.label(format!("Max: {:.2} °C", s.max_temp_c));
            ui.label(format!("Heater-on equilibrium: {:.1} °C", s.equilibrium_temp_c));
        }
    }

    fn show_plot(&self, ui: &mut egui::Ui) {
        let Some(result) = &self.result else {
            ui.label("No run to plot");
            return;
        };

        let points: Vec<[f64; 2]> = result
            .time_min
            .iter()
            .zip(result.temp_c.iter())
            .map(|(&t, &temp)| [t, temp])
            .collect();
        let plot_points: PlotPoints = points.into();
        let temp_line = Line::new(plot_points).name("Tank water temperature");
        let ambient_line = HLine::new(result.summary.ambient_temp_c).name("Ambient temperature");

        Plot::new("tank_temperature")
            .legend(Legend::default())
            .x_axis_label("Time (minutes)")
            .y_axis_label("Temperature (°C)")
            .show(ui, |plot_ui| {
                plot_ui.line(temp_line);
                plot_ui.hline(ambient_line);
            });
    }
}

impl eframe::App for TankthermApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("parameters")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                self.show_parameter_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Tank heating simulation");
            self.show_plot(ui);
        });
    }
}
