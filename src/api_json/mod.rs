use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ErrorCuadro;
use crate::filtros::CriteriosFiltro;
use crate::models::{Cuadro, Equipo, Proceso, Turno};

/// Instantánea de las colecciones del backend
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "cuadros": [{ "id": "B1", "nombre": "UCI Adultos", "equipoId": 3 }],
///   "procesos": [{ "id": 10, "nombre": "Hemodiálisis", "cuadroId": "B1" }],
///   "equipos": [{ "id": 3, "miembros": [{ "personaId": 41, "perfiles": ["Enfermera Clínica"] }] }],
///   "turnos": [{
///     "id": 1, "asignadoId": 41, "asignadoNombre": "Ana", "cuadroId": "B1",
///     "procesoId": 10, "inicio": "2024-06-03T08:00:00", "fin": "2024-06-03T20:00:00",
///     "jornada": "Mañana", "totalHoras": 12, "comentarios": null
///   }]
/// }
/// ```
///
/// Cualquier colección ausente se toma como vacía.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatosCuadros {
    #[serde(default)]
    pub cuadros: Vec<Cuadro>,
    #[serde(default)]
    pub procesos: Vec<Proceso>,
    #[serde(default)]
    pub equipos: Vec<Equipo>,
    #[serde(default)]
    pub turnos: Vec<Turno>,
}

pub fn parse_datos(json_str: &str) -> Result<DatosCuadros, ErrorCuadro> {
    Ok(serde_json::from_str::<DatosCuadros>(json_str)?)
}

/// Criterios de filtrado tal como los envía el formulario:
/// `{"cuadroId": "B1", "anio": 2024, "mes": 6, "procesoId": null, "perfil": "enfermera"}`
pub fn parse_criterios(json_str: &str) -> Result<CriteriosFiltro, ErrorCuadro> {
    Ok(serde_json::from_str::<CriteriosFiltro>(json_str)?)
}

/// Lee una instantánea desde disco
pub async fn cargar_datos<P: AsRef<Path>>(ruta: P) -> Result<DatosCuadros, ErrorCuadro> {
    let contenido = tokio::fs::read_to_string(ruta.as_ref()).await?;
    let datos = parse_datos(&contenido)?;
    log::info!(
        "Datos cargados desde {}: {} cuadros, {} turnos",
        ruta.as_ref().display(),
        datos.cuadros.len(),
        datos.turnos.len()
    );
    Ok(datos)
}
