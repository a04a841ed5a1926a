//! Filtros del calendario de turnos.
//!
//! Las etapas se aplican en orden estricto, cada una sobre la salida de la
//! anterior: cuadro -> período -> proceso -> perfil. Sin cuadro seleccionado
//! el resultado es vacío y no se ejecuta ninguna etapa.
//!
//! Las tres primeras son predicados en memoria y no fallan. La de perfil
//! necesita las membresías del equipo del cuadro (un colaborador); si esa
//! consulta falla, la etapa se omite y se informa al `Observador`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Datelike;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::colaboradores::Colaboradores;
use crate::models::{Identificador, MembresiaEquipo, Turno};
use crate::observador::{Observador, ObservadorLog};

/// Criterios del formulario de búsqueda. `mes` va de 1 (enero) a 12.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriosFiltro {
    #[serde(default)]
    pub cuadro_id: Option<Identificador>,
    pub anio: i32,
    pub mes: u32,
    #[serde(default)]
    pub proceso_id: Option<Identificador>,
    #[serde(default)]
    pub perfil: Option<String>,
}

impl CriteriosFiltro {
    pub fn new(cuadro_id: impl Into<Identificador>, anio: i32, mes: u32) -> Self {
        CriteriosFiltro {
            cuadro_id: Some(cuadro_id.into()),
            anio,
            mes,
            ..Default::default()
        }
    }

    pub fn con_proceso(mut self, proceso_id: impl Into<Identificador>) -> Self {
        self.proceso_id = Some(proceso_id.into());
        self
    }

    pub fn con_perfil(mut self, perfil: &str) -> Self {
        self.perfil = Some(perfil.to_string());
        self
    }

    /// Cuadro seleccionado, si no está vacío
    pub fn cuadro(&self) -> Option<&Identificador> {
        self.cuadro_id.as_ref().filter(|id| !id.is_empty())
    }

    fn proceso(&self) -> Option<&Identificador> {
        self.proceso_id.as_ref().filter(|id| !id.is_empty())
    }

    fn perfil_buscado(&self) -> Option<&str> {
        self.perfil.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }
}

/// Etapa 1: cuadro
pub fn filtrar_por_cuadro(turnos: Vec<Turno>, cuadro_id: &Identificador) -> Vec<Turno> {
    turnos
        .into_iter()
        .filter(|t| t.cuadro_id.as_ref() == Some(cuadro_id))
        .collect()
}

/// Etapa 2: año y mes (1-12) de la fecha local de inicio.
/// Los turnos sin inicio interpretable quedan fuera.
pub fn filtrar_por_periodo(turnos: Vec<Turno>, anio: i32, mes: u32, zona: Tz) -> Vec<Turno> {
    turnos
        .into_iter()
        .filter(|t| match t.fecha(zona) {
            Some(f) => f.year() == anio && f.month() == mes,
            None => false,
        })
        .collect()
}

/// Etapa 3: proceso
pub fn filtrar_por_proceso(turnos: Vec<Turno>, proceso_id: &Identificador) -> Vec<Turno> {
    turnos
        .into_iter()
        .filter(|t| t.proceso_id.as_ref() == Some(proceso_id))
        .collect()
}

/// Etapa 4 como función pura: conserva los turnos cuya persona tiene algún
/// perfil que contiene `perfil` (sin distinguir mayúsculas).
///
/// "enfermera" calza con "Enfermera Clínica" y con "TENS / enfermera"; no es
/// una comparación exacta.
pub fn filtrar_por_perfil(turnos: Vec<Turno>, miembros: &[MembresiaEquipo], perfil: &str) -> Vec<Turno> {
    let buscado = perfil.to_lowercase();
    let perfiles_por_persona: HashMap<&Identificador, &[String]> = miembros
        .iter()
        .map(|m| (&m.persona_id, m.perfiles.as_slice()))
        .collect();

    turnos
        .into_iter()
        .filter(|t| {
            t.asignado_id
                .as_ref()
                .and_then(|id| perfiles_por_persona.get(id))
                .map(|perfiles| perfiles.iter().any(|p| p.to_lowercase().contains(&buscado)))
                .unwrap_or(false)
        })
        .collect()
}

/// Cadena de filtros del calendario
#[derive(Clone)]
pub struct PipelineFiltros {
    zona: Tz,
    observador: Arc<dyn Observador>,
}

impl PipelineFiltros {
    pub fn new(zona: Tz) -> Self {
        PipelineFiltros { zona, observador: Arc::new(ObservadorLog) }
    }

    pub fn con_observador(mut self, observador: Arc<dyn Observador>) -> Self {
        self.observador = observador;
        self
    }

    pub fn zona(&self) -> Tz {
        self.zona
    }

    /// Aplica las etapas habilitadas por `criterios` sobre `turnos`.
    ///
    /// No modifica la entrada ni guarda estado: dos llamadas con los mismos
    /// argumentos (y el mismo colaborador) dan el mismo resultado.
    pub async fn aplicar(
        &self,
        turnos: &[Turno],
        criterios: &CriteriosFiltro,
        colaboradores: &dyn Colaboradores,
    ) -> Vec<Turno> {
        let Some(cuadro_id) = criterios.cuadro() else {
            return Vec::new();
        };

        let mut resultado = filtrar_por_cuadro(turnos.to_vec(), cuadro_id);
        log::debug!("filtro cuadro {}: {} turnos", cuadro_id, resultado.len());

        resultado = filtrar_por_periodo(resultado, criterios.anio, criterios.mes, self.zona);
        log::debug!("filtro período {}/{}: {} turnos", criterios.mes, criterios.anio, resultado.len());

        if let Some(proceso_id) = criterios.proceso() {
            resultado = filtrar_por_proceso(resultado, proceso_id);
            log::debug!("filtro proceso {}: {} turnos", proceso_id, resultado.len());
        }

        if let Some(perfil) = criterios.perfil_buscado() {
            match colaboradores.obtener_equipo(cuadro_id).await {
                Ok(equipo) => {
                    resultado = filtrar_por_perfil(resultado, &equipo.miembros, perfil);
                    log::debug!("filtro perfil '{}': {} turnos", perfil, resultado.len());
                }
                Err(e) => self.observador.etapa_omitida("perfil", &e),
            }
        }

        resultado
    }
}
