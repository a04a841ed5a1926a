// Índice de turnos por fecha local de inicio.

use std::collections::HashMap;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::models::Turno;

/// Turnos agrupados por la fecha (sin hora) de su inicio.
///
/// La fecha se calcula con la misma zona que usa la grilla; los turnos sin
/// inicio interpretable no se indexan. No hay actualización incremental: si
/// cambia la colección, se construye un índice nuevo.
#[derive(Debug, Clone, Default)]
pub struct IndiceFechas<'a> {
    por_fecha: HashMap<NaiveDate, Vec<&'a Turno>>,
    zona: Option<Tz>,
}

impl<'a> IndiceFechas<'a> {
    pub fn construir(turnos: &'a [Turno], zona: Tz) -> Self {
        let mut por_fecha: HashMap<NaiveDate, Vec<&'a Turno>> = HashMap::new();
        for turno in turnos {
            if let Some(fecha) = turno.fecha(zona) {
                por_fecha.entry(fecha).or_default().push(turno);
            }
        }
        IndiceFechas { por_fecha, zona: Some(zona) }
    }

    /// Turnos de `fecha` en el orden de entrada; vacío si no hay
    pub fn buscar(&self, fecha: NaiveDate) -> &[&'a Turno] {
        self.por_fecha.get(&fecha).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Horas de los turnos de `fecha` (derivadas de inicio/fin cuando falta el total)
    pub fn horas_del_dia(&self, fecha: NaiveDate) -> f64 {
        match self.zona {
            Some(zona) => self.buscar(fecha).iter().map(|t| t.horas(zona)).sum(),
            None => 0.0,
        }
    }

    pub fn cantidad_dias(&self) -> usize {
        self.por_fecha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.por_fecha.is_empty()
    }
}
