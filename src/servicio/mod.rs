//! Casos de uso de las vistas: orquesta colaboradores, filtros, calendario,
//! paginación y reportes siguiendo el flujo
//! colaboradores -> filtros -> índice + grilla / reporte -> paginación.

use futures_util::future::join;
use serde::Serialize;

use crate::calendario::{construir_mes, IndiceFechas, SemanaCalendario};
use crate::colaboradores::Colaboradores;
use crate::error::ErrorCuadro;
use crate::filtros::{CriteriosFiltro, PipelineFiltros};
use crate::models::{Identificador, Proceso, Turno};
use crate::paginacion::{ElementoPagina, EstadoPaginacion, PaginadorGrupos};
use crate::reportes::{agregar, resumir, ReporteTurnos, ResumenReporte};

#[derive(Debug, Clone, Default)]
pub struct DatosCuadro {
    pub turnos: Vec<Turno>,
    pub procesos: Vec<Proceso>,
}

/// Turnos y procesos de un cuadro, pedidos en paralelo
pub async fn cargar_cuadro(
    colaboradores: &dyn Colaboradores,
    cuadro_id: &Identificador,
) -> Result<DatosCuadro, ErrorCuadro> {
    let (turnos, procesos) = join(
        colaboradores.obtener_turnos_cuadro(cuadro_id),
        colaboradores.obtener_procesos_cuadro(cuadro_id),
    )
    .await;
    Ok(DatosCuadro { turnos: turnos?, procesos: procesos? })
}

/// Procesos del cuadro ordenados por nombre, para el selector de procesos
pub async fn procesos_de_cuadro(
    colaboradores: &dyn Colaboradores,
    cuadro_id: &Identificador,
) -> Result<Vec<Proceso>, ErrorCuadro> {
    let mut procesos = colaboradores.obtener_procesos_cuadro(cuadro_id).await?;
    procesos.sort_by(|a, b| a.nombre.to_lowercase().cmp(&b.nombre.to_lowercase()));
    Ok(procesos)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VistaCalendario {
    pub anio: i32,
    pub mes: u32,
    pub semanas: Vec<SemanaCalendario>,
    pub total_turnos: usize,
    pub total_horas: f64,
}

/// Grilla mensual con los turnos filtrados según `criterios`.
///
/// Sin cuadro seleccionado devuelve la grilla del período sin turnos y no
/// consulta a ningún colaborador.
pub async fn vista_calendario(
    colaboradores: &dyn Colaboradores,
    criterios: &CriteriosFiltro,
    pipeline: &PipelineFiltros,
) -> Result<VistaCalendario, ErrorCuadro> {
    let turnos = match criterios.cuadro() {
        Some(cuadro_id) => {
            let crudos = colaboradores.obtener_turnos_cuadro(cuadro_id).await?;
            pipeline.aplicar(&crudos, criterios, colaboradores).await
        }
        None => Vec::new(),
    };

    let zona = pipeline.zona();
    let indice = IndiceFechas::construir(&turnos, zona);
    let semanas = match criterios.mes.checked_sub(1) {
        Some(mes0) => construir_mes(criterios.anio, mes0, &indice),
        None => {
            log::warn!("Mes 0 en los criterios; se esperaba 1-12");
            Vec::new()
        }
    };

    Ok(VistaCalendario {
        anio: criterios.anio,
        mes: criterios.mes,
        total_turnos: turnos.len(),
        total_horas: turnos.iter().map(|t| t.horas(zona)).sum(),
        semanas,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct VistaReporte {
    pub reporte: ReporteTurnos,
    pub resumen: ResumenReporte,
}

/// Reporte por persona y resumen de los turnos filtrados
pub async fn vista_reporte(
    colaboradores: &dyn Colaboradores,
    criterios: &CriteriosFiltro,
    seleccionado: Option<&str>,
    pipeline: &PipelineFiltros,
) -> Result<VistaReporte, ErrorCuadro> {
    let turnos = match criterios.cuadro() {
        Some(cuadro_id) => {
            let crudos = colaboradores.obtener_turnos_cuadro(cuadro_id).await?;
            pipeline.aplicar(&crudos, criterios, colaboradores).await
        }
        None => Vec::new(),
    };

    Ok(VistaReporte {
        reporte: agregar(&turnos, seleccionado, pipeline.zona()),
        resumen: resumir(&turnos),
    })
}

/// Un grupo del reporte tal como se dibuja: sólo la página visible de sus turnos
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrupoPaginado {
    pub nombre: String,
    pub cantidad: usize,
    pub total_horas: f64,
    pub pagina: usize,
    pub total_paginas: usize,
    pub ventana: Vec<ElementoPagina>,
    pub turnos: Vec<Turno>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginaReporte {
    pub pagina: usize,
    pub total_paginas: usize,
    pub ventana: Vec<ElementoPagina>,
    pub grupos: Vec<GrupoPaginado>,
}

/// Pagina la lista de personas con `externo` y la lista de turnos de cada
/// persona con su propio estado en `por_grupo`.
pub fn pagina_de_reporte(
    reporte: &ReporteTurnos,
    externo: &EstadoPaginacion,
    por_grupo: &PaginadorGrupos,
    radio: usize,
) -> PaginaReporte {
    let grupos = externo
        .paginar(&reporte.claves)
        .iter()
        .map(|clave| {
            let turnos = reporte.turnos_de(clave);
            GrupoPaginado {
                nombre: clave.clone(),
                cantidad: turnos.len(),
                total_horas: reporte.total_horas_grupo(clave),
                pagina: por_grupo.pagina(clave),
                total_paginas: por_grupo.total_paginas(clave, turnos),
                ventana: por_grupo.ventana(clave, turnos),
                turnos: por_grupo.paginar(clave, turnos).to_vec(),
            }
        })
        .collect();

    PaginaReporte {
        pagina: externo.pagina(),
        total_paginas: externo.total_paginas(reporte.claves.len()),
        ventana: externo.ventana(reporte.claves.len(), radio),
        grupos,
    }
}
