//! Lumped thermal mass parameters and energy balance.

use crate::error::ModelResult;
use tt_core::units::{
    Density, Power, SpecificHeat, Temperature, ThermalConductance, Volume, as_celsius,
};
use tt_core::{ensure_finite, ensure_positive};

/// Parameters of a water tank treated as a single lumped thermal mass.
///
/// Energy balance:
///   dT/dt = (P_heater - loss_coeff * (T - T_ambient)) / (rho * V * c_p)
///
/// Constructed from uom quantities at the boundary; stored as plain f64 in
/// the units the simulation math runs in.
#[derive(Clone, Debug, PartialEq)]
pub struct TankParams {
    /// Heater power at full output (W)
    pub heater_full_power_w: f64,
    /// Heat loss coefficient to ambient (W/°C)
    pub loss_coeff_w_per_c: f64,
    /// Specific heat of the water (J/kg°C)
    pub cp_j_per_kg_c: f64,
    /// Water density (kg/m³)
    pub rho_kg_m3: f64,
    /// Tank water volume (m³)
    pub volume_m3: f64,
    /// Ambient temperature (°C)
    pub ambient_temp_c: f64,
}

impl TankParams {
    /// Create validated tank parameters.
    ///
    /// Every quantity must be strictly positive except the ambient
    /// temperature, which may be any finite value.
    pub fn new(
        heater_full_power: Power,
        loss_coeff: ThermalConductance,
        specific_heat: SpecificHeat,
        density: Density,
        volume: Volume,
        ambient_temp: Temperature,
    ) -> ModelResult<Self> {
        let heater_full_power_w = ensure_positive(heater_full_power.value, "heater_full_power")?;
        let loss_coeff_w_per_c = ensure_positive(loss_coeff.value, "loss_coeff")?;
        let cp_j_per_kg_c = ensure_positive(specific_heat.value, "specific_heat")?;
        let rho_kg_m3 = ensure_positive(density.value, "density")?;
        let volume_m3 = ensure_positive(volume.value, "volume")?;
        let ambient_temp_c = ensure_finite(as_celsius(ambient_temp), "ambient_temp")?;

        Ok(Self {
            heater_full_power_w,
            loss_coeff_w_per_c,
            cp_j_per_kg_c,
            rho_kg_m3,
            volume_m3,
            ambient_temp_c,
        })
    }

    /// Total thermal capacity rho * V * c_p (J/°C).
    pub fn thermal_capacity_j_per_c(&self) -> f64 {
        self.rho_kg_m3 * self.volume_m3 * self.cp_j_per_kg_c
    }

    /// Thermal time constant rho * V * c_p / loss_coeff (seconds).
    pub fn time_constant_s(&self) -> f64 {
        self.thermal_capacity_j_per_c() / self.loss_coeff_w_per_c
    }

    /// Rate of temperature change (°C/s) at the given temperature and
    /// instantaneous heater power.
    pub fn dtemp_dt(&self, temp_c: f64, power_w: f64) -> f64 {
        (power_w - self.loss_coeff_w_per_c * (temp_c - self.ambient_temp_c))
            / self.thermal_capacity_j_per_c()
    }

    /// Steady-state temperature (°C) under constant heater power.
    pub fn equilibrium_temp_c(&self, power_w: f64) -> f64 {
        self.ambient_temp_c + power_w / self.loss_coeff_w_per_c
    }

    /// Exact solution over one interval of constant heater power.
    ///
    /// The energy balance is linear in T for fixed power, so the trajectory
    /// is an exponential relaxation toward the equilibrium temperature:
    ///   T(t0 + dt) = T_eq + (T(t0) - T_eq) * exp(-dt / tau)
    ///
    /// Serves as the per-interval oracle in tests; the simulation itself
    /// integrates numerically.
    pub fn exact_step(&self, temp0_c: f64, power_w: f64, dt_s: f64) -> f64 {
        let t_eq = self.equilibrium_temp_c(power_w);
        t_eq + (temp0_c - t_eq) * (-dt_s / self.time_constant_s()).exp()
    }
}
