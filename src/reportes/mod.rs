//! Reporte de turnos por persona y resúmenes para gráficos.
//!
//! Los grupos se arman por nombre visible de la persona, no por su id: dos
//! personas con el mismo nombre quedan en un mismo grupo. Los resúmenes se
//! calculan siempre sobre la colección filtrada completa, nunca sobre la
//! página visible del reporte.

use std::collections::HashMap;

use chrono_tz::Tz;
use serde::Serialize;

use crate::models::{Jornada, Turno};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReporteTurnos {
    pub grupos: HashMap<String, Vec<Turno>>,
    /// Claves a mostrar: en orden de primera aparición, o sólo la seleccionada
    pub claves: Vec<String>,
}

/// Agrupa `turnos` por persona.
///
/// Con `seleccionado`, `claves` queda restringido a ese nombre exacto (o vacío
/// si no aparece); los grupos siguen conteniendo a todas las personas. Un
/// `seleccionado` en blanco equivale a no seleccionar a nadie. Dentro
/// de cada grupo los turnos quedan ordenados por inicio ascendente.
pub fn agregar(turnos: &[Turno], seleccionado: Option<&str>, zona: Tz) -> ReporteTurnos {
    let mut grupos: HashMap<String, Vec<Turno>> = HashMap::new();
    let mut orden: Vec<String> = Vec::new();

    for turno in turnos {
        let clave = turno.clave_grupo();
        match grupos.get_mut(clave) {
            Some(lista) => lista.push(turno.clone()),
            None => {
                orden.push(clave.to_string());
                grupos.insert(clave.to_string(), vec![turno.clone()]);
            }
        }
    }

    for lista in grupos.values_mut() {
        lista.sort_by_key(|t| t.inicio_local(zona));
    }

    let claves = match seleccionado.filter(|s| !s.trim().is_empty()) {
        Some(nombre) => orden.into_iter().filter(|c| c == nombre).collect(),
        None => orden,
    };

    ReporteTurnos { grupos, claves }
}

impl ReporteTurnos {
    pub fn turnos_de(&self, clave: &str) -> &[Turno] {
        self.grupos.get(clave).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Suma de `total_horas` del grupo; los turnos sin total cuentan 0
    pub fn total_horas_grupo(&self, clave: &str) -> f64 {
        self.turnos_de(clave).iter().map(Turno::horas_registradas).sum()
    }

    pub fn cantidad_grupo(&self, clave: &str) -> usize {
        self.turnos_de(clave).len()
    }

    /// Grupos visibles en el orden de `claves`
    pub fn grupos_ordenados(&self) -> impl Iterator<Item = (&str, &[Turno])> + '_ {
        self.claves.iter().map(|c| (c.as_str(), self.turnos_de(c)))
    }
}

/// Conteo de turnos por jornada. Sólo Mañana, Tarde y Noche: cualquier otra
/// etiqueta (o su ausencia) no se cuenta en ninguna parte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DistribucionJornadas {
    pub manana: usize,
    pub tarde: usize,
    pub noche: usize,
}

impl DistribucionJornadas {
    pub fn total(&self) -> usize {
        self.manana + self.tarde + self.noche
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HorasPorJornada {
    pub manana: f64,
    pub tarde: f64,
    pub noche: f64,
}

pub fn distribucion_por_jornada(turnos: &[Turno]) -> DistribucionJornadas {
    let mut d = DistribucionJornadas::default();
    for t in turnos {
        match t.jornada() {
            Some(Jornada::Manana) => d.manana += 1,
            Some(Jornada::Tarde) => d.tarde += 1,
            Some(Jornada::Noche) => d.noche += 1,
            _ => {}
        }
    }
    d
}

pub fn horas_por_jornada(turnos: &[Turno]) -> HorasPorJornada {
    let mut h = HorasPorJornada::default();
    for t in turnos {
        match t.jornada() {
            Some(Jornada::Manana) => h.manana += t.horas_registradas(),
            Some(Jornada::Tarde) => h.tarde += t.horas_registradas(),
            Some(Jornada::Noche) => h.noche += t.horas_registradas(),
            _ => {}
        }
    }
    h
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorasAsignado {
    pub nombre: String,
    pub horas: f64,
    pub turnos: usize,
}

/// Horas y cantidad de turnos por persona, en orden de primera aparición
pub fn horas_por_asignado(turnos: &[Turno]) -> Vec<HorasAsignado> {
    let mut posiciones: HashMap<&str, usize> = HashMap::new();
    let mut salida: Vec<HorasAsignado> = Vec::new();
    for t in turnos {
        let clave = t.clave_grupo();
        let i = *posiciones.entry(clave).or_insert_with(|| {
            salida.push(HorasAsignado { nombre: clave.to_string(), horas: 0.0, turnos: 0 });
            salida.len() - 1
        });
        salida[i].horas += t.horas_registradas();
        salida[i].turnos += 1;
    }
    salida
}

/// Números que consumen los gráficos y la exportación del reporte
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenReporte {
    pub total_turnos: usize,
    pub total_horas: f64,
    pub distribucion: DistribucionJornadas,
    pub horas_por_jornada: HorasPorJornada,
    pub horas_por_asignado: Vec<HorasAsignado>,
}

pub fn resumir(turnos: &[Turno]) -> ResumenReporte {
    ResumenReporte {
        total_turnos: turnos.len(),
        total_horas: turnos.iter().map(Turno::horas_registradas).sum(),
        distribucion: distribucion_por_jornada(turnos),
        horas_por_jornada: horas_por_jornada(turnos),
        horas_por_asignado: horas_por_asignado(turnos),
    }
}
