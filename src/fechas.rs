// Política única de zona horaria para claves de fecha.
//
// Todo componente que necesite "el día de un turno" (índice por fecha, filtro
// de período, orden de reportes) pasa por `fecha_hora_local`. Si dos lugares
// usaran reglas distintas, las celdas del calendario quedarían en cero.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

const FORMATOS_SIN_ZONA: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Interpreta una marca de tiempo del backend como fecha-hora local de `zona`.
///
/// - con desfase explícito (`2024-06-03T11:00:00Z`, `...-04:00`): se convierte a `zona`
/// - sin desfase (`2024-06-03T08:00:00`): ya es hora local
/// - sólo fecha (`2024-06-03`): medianoche local
///
/// Devuelve `None` para textos vacíos o irreconocibles.
pub fn fecha_hora_local(marca: &str, zona: Tz) -> Option<NaiveDateTime> {
    let marca = marca.trim();
    if marca.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(marca) {
        return Some(dt.with_timezone(&zona).naive_local());
    }

    for formato in FORMATOS_SIN_ZONA {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(marca, formato) {
            return Some(ndt);
        }
    }

    // "2024-06-03" o el prefijo de fecha de algo más largo ("2024-06-03T08")
    let prefijo = marca.get(..10).unwrap_or(marca);
    NaiveDate::parse_from_str(prefijo, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Clave de fecha (sin hora) de una marca de tiempo en `zona`
pub fn fecha_local(marca: &str, zona: Tz) -> Option<NaiveDate> {
    fecha_hora_local(marca, zona).map(|dt| dt.date())
}

/// Horas entre dos marcas de tiempo; `None` si alguna no se puede interpretar
/// o si el fin es anterior al inicio.
pub fn horas_entre(inicio: &str, fin: &str, zona: Tz) -> Option<f64> {
    let a = fecha_hora_local(inicio, zona)?;
    let b = fecha_hora_local(fin, zona)?;
    let minutos = (b - a).num_minutes();
    if minutos < 0 {
        None
    } else {
        Some(minutos as f64 / 60.0)
    }
}
