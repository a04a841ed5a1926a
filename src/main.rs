// --- Inspección de cuadros de turno desde una instantánea JSON ---

use cuadroturnos::api_json::cargar_datos;
use cuadroturnos::models::Identificador;
use cuadroturnos::paginacion::{EstadoPaginacion, PaginadorGrupos};
use cuadroturnos::servicio::{pagina_de_reporte, vista_calendario, vista_reporte};
use cuadroturnos::{ColaboradorMemoria, Configuracion, CriteriosFiltro, ErrorCuadro, PipelineFiltros};
use serde_json::json;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ErrorCuadro> {
    let cfg = Configuracion::desde_entorno()?;

    let archivo = cfg
        .archivo_datos
        .clone()
        .ok_or_else(|| ErrorCuadro::Configuracion("falta CUADROS_ARCHIVO_DATOS".to_string()))?;
    let (Some(cuadro_id), Some(anio), Some(mes)) = (cfg.cuadro_id.clone(), cfg.anio, cfg.mes) else {
        return Err(ErrorCuadro::Configuracion(
            "se requieren CUADROS_CUADRO_ID, CUADROS_ANIO y CUADROS_MES".to_string(),
        ));
    };

    let colaborador = ColaboradorMemoria::new(cargar_datos(&archivo).await?);
    let pipeline = PipelineFiltros::new(cfg.zona_horaria);

    let mut criterios = CriteriosFiltro::new(cuadro_id.as_str(), anio, mes);
    criterios.proceso_id = cfg.proceso_id.as_deref().map(Identificador::from);
    criterios.perfil = cfg.perfil.clone();

    log::info!("Cuadro {} período {}/{}", cuadro_id, mes, anio);

    let calendario = vista_calendario(&colaborador, &criterios, &pipeline).await?;
    let reporte = vista_reporte(&colaborador, &criterios, None, &pipeline).await?;

    let externo = EstadoPaginacion::new(cfg.tamano_pagina);
    let por_grupo = PaginadorGrupos::new(cfg.tamano_pagina, cfg.radio_paginas);
    let pagina = pagina_de_reporte(&reporte.reporte, &externo, &por_grupo, cfg.radio_paginas);

    let salida = json!({
        "calendario": calendario,
        "reporte": pagina,
        "resumen": reporte.resumen,
    });
    println!("{}", serde_json::to_string_pretty(&salida)?);
    Ok(())
}
