// Estructuras de datos principales (tal como llegan del backend)

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fechas;

/// Clave de grupo para turnos sin persona asignada
pub const SIN_ASIGNAR: &str = "Sin asignar";

/// Identificador del backend. Llega a veces como número y a veces como texto;
/// se compara siempre por su forma de texto, de modo que `12` y `"12"` son el
/// mismo cuadro.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "IdCrudo")]
pub struct Identificador(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum IdCrudo {
    Texto(String),
    Entero(i64),
    Decimal(f64),
}

impl From<IdCrudo> for Identificador {
    fn from(crudo: IdCrudo) -> Self {
        match crudo {
            IdCrudo::Texto(s) => Identificador(s),
            IdCrudo::Entero(n) => Identificador(n.to_string()),
            IdCrudo::Decimal(x) => Identificador(x.to_string()),
        }
    }
}

impl Identificador {
    pub fn new(valor: impl Into<String>) -> Self {
        Identificador(valor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Identificador {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identificador {
    fn from(s: &str) -> Self {
        Identificador(s.to_string())
    }
}

impl From<i64> for Identificador {
    fn from(n: i64) -> Self {
        Identificador(n.to_string())
    }
}

/// Jornada (franja) de un turno
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Jornada {
    Manana,
    Tarde,
    Noche,
    /// Cualquier otra etiqueta; no entra en la distribución por jornada
    Otra(String),
}

impl Jornada {
    pub const CONOCIDAS: [Jornada; 3] = [Jornada::Manana, Jornada::Tarde, Jornada::Noche];

    /// Sólo las etiquetas exactas del backend; "manana" o "NOCHE" son `Otra`
    pub fn desde_etiqueta(etiqueta: &str) -> Jornada {
        match etiqueta {
            "Mañana" => Jornada::Manana,
            "Tarde" => Jornada::Tarde,
            "Noche" => Jornada::Noche,
            _ => Jornada::Otra(etiqueta.to_string()),
        }
    }

    pub fn etiqueta(&self) -> &str {
        match self {
            Jornada::Manana => "Mañana",
            Jornada::Tarde => "Tarde",
            Jornada::Noche => "Noche",
            Jornada::Otra(s) => s,
        }
    }
}

/// Turno asignado a una persona dentro de un cuadro.
///
/// El núcleo nunca modifica un turno; sólo deriva vistas a partir de ellos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turno {
    #[serde(default)]
    pub id: Identificador,
    #[serde(default)]
    pub asignado_id: Option<Identificador>,
    #[serde(default)]
    pub asignado_nombre: Option<String>,
    #[serde(default)]
    pub cuadro_id: Option<Identificador>,
    #[serde(default)]
    pub proceso_id: Option<Identificador>,
    #[serde(default)]
    pub inicio: Option<String>,
    #[serde(default)]
    pub fin: Option<String>,
    #[serde(default)]
    pub jornada: Option<String>,
    /// Horas autoritativas informadas por el backend
    #[serde(default)]
    pub total_horas: Option<f64>,
    #[serde(default)]
    pub comentarios: Option<String>,
}

impl Turno {
    /// Nombre visible de la persona, o `"Sin asignar"`
    pub fn clave_grupo(&self) -> &str {
        match self.asignado_nombre.as_deref() {
            Some(nombre) if !nombre.trim().is_empty() => nombre,
            _ => SIN_ASIGNAR,
        }
    }

    pub fn jornada(&self) -> Option<Jornada> {
        self.jornada.as_deref().map(Jornada::desde_etiqueta)
    }

    pub fn inicio_local(&self, zona: Tz) -> Option<NaiveDateTime> {
        self.inicio
            .as_deref()
            .and_then(|s| fechas::fecha_hora_local(s, zona))
    }

    /// Fecha (sin hora) del inicio del turno en `zona`
    pub fn fecha(&self, zona: Tz) -> Option<NaiveDate> {
        self.inicio_local(zona).map(|dt| dt.date())
    }

    /// `total_horas` tal como viene; 0 si falta
    pub fn horas_registradas(&self) -> f64 {
        self.total_horas.unwrap_or(0.0)
    }

    /// `total_horas` o, si falta, la duración entre inicio y fin
    pub fn horas(&self, zona: Tz) -> f64 {
        if let Some(h) = self.total_horas {
            return h;
        }
        match (self.inicio.as_deref(), self.fin.as_deref()) {
            (Some(a), Some(b)) => fechas::horas_entre(a, b, zona).unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembresiaEquipo {
    pub persona_id: Identificador,
    #[serde(default)]
    pub perfiles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipo {
    pub id: Identificador,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub miembros: Vec<MembresiaEquipo>,
}

/// Cuadro de turnos: la planilla de un equipo para un período
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cuadro {
    pub id: Identificador,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub equipo_id: Option<Identificador>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proceso {
    pub id: Identificador,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub cuadro_id: Option<Identificador>,
}
