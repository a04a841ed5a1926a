use async_trait::async_trait;
use chrono::NaiveDate;
use chrono_tz::America::Santiago;
use cuadroturnos::api_json::DatosCuadros;
use cuadroturnos::colaboradores::{ColaboradorMemoria, Colaboradores};
use cuadroturnos::error::ErrorCuadro;
use cuadroturnos::filtros::{CriteriosFiltro, PipelineFiltros};
use cuadroturnos::models::{Cuadro, Equipo, Identificador, Proceso, Turno};
use cuadroturnos::paginacion::{ElementoPagina, EstadoPaginacion, PaginadorGrupos};
use cuadroturnos::servicio::{
    cargar_cuadro, pagina_de_reporte, procesos_de_cuadro, vista_calendario, vista_reporte,
};

fn turno(id: i64, nombre: &str, cuadro: &str, inicio: &str, horas: f64) -> Turno {
    Turno {
        id: id.into(),
        asignado_nombre: Some(nombre.to_string()),
        cuadro_id: Some(cuadro.into()),
        inicio: Some(inicio.to_string()),
        jornada: Some("Mañana".to_string()),
        total_horas: Some(horas),
        ..Default::default()
    }
}

/// Ana con 8, 8 y 4 horas y Luis con 6 en junio 2024, más ruido de otro mes y otro cuadro
fn escenario() -> ColaboradorMemoria {
    ColaboradorMemoria::new(DatosCuadros {
        cuadros: vec![Cuadro { id: "B1".into(), nombre: "UCI".to_string(), equipo_id: None }],
        procesos: vec![
            Proceso { id: Identificador::from(2i64), nombre: "urgencia".to_string(), cuadro_id: Some("B1".into()) },
            Proceso { id: Identificador::from(1i64), nombre: "Aseo".to_string(), cuadro_id: Some("B1".into()) },
            Proceso { id: Identificador::from(3i64), nombre: "Pabellón".to_string(), cuadro_id: Some("B2".into()) },
        ],
        equipos: vec![],
        turnos: vec![
            turno(1, "Ana", "B1", "2024-06-03T08:00:00", 8.0),
            turno(2, "Ana", "B1", "2024-06-04T08:00:00", 8.0),
            turno(3, "Luis", "B1", "2024-06-04T08:00:00", 6.0),
            turno(4, "Ana", "B1", "2024-06-20T08:00:00", 4.0),
            turno(5, "Ana", "B1", "2024-07-01T08:00:00", 12.0),
            turno(6, "Luis", "B2", "2024-06-05T08:00:00", 12.0),
        ],
    })
}

#[tokio::test]
async fn test_escenario_reporte_ana_y_luis() {
    let colab = escenario();
    let pipeline = PipelineFiltros::new(Santiago);
    let criterios = CriteriosFiltro::new("B1", 2024, 6);

    let vista = vista_reporte(&colab, &criterios, None, &pipeline).await.expect("reporte");
    assert_eq!(vista.reporte.claves, vec!["Ana", "Luis"]);
    assert_eq!(vista.reporte.total_horas_grupo("Ana"), 20.0);
    assert_eq!(vista.reporte.total_horas_grupo("Luis"), 6.0);
    assert_eq!(vista.resumen.total_horas, 26.0);
    assert_eq!(vista.resumen.distribucion.manana, 4);
}

#[tokio::test]
async fn test_vista_calendario_junio() {
    let colab = escenario();
    let pipeline = PipelineFiltros::new(Santiago);
    let criterios = CriteriosFiltro::new("B1", 2024, 6);

    let vista = vista_calendario(&colab, &criterios, &pipeline).await.expect("calendario");
    // junio 2024 empieza sábado: lunes 27 de mayo a domingo 30 de junio
    assert_eq!(vista.semanas.len(), 5);
    assert_eq!(
        vista.semanas[0].primer_dia(),
        NaiveDate::from_ymd_opt(2024, 5, 27)
    );
    assert_eq!(vista.total_turnos, 4);
    assert_eq!(vista.total_horas, 26.0);
    let horas: Vec<f64> = vista.semanas.iter().map(|s| s.total_horas).collect();
    assert_eq!(horas, vec![0.0, 22.0, 0.0, 4.0, 0.0]);
}

#[tokio::test]
async fn test_sin_cuadro_grilla_vacia_sin_llamadas() {
    let pipeline = PipelineFiltros::new(Santiago);
    let criterios = CriteriosFiltro { anio: 2024, mes: 2, ..Default::default() };

    let vista = vista_calendario(&ServicioCaido, &criterios, &pipeline).await.expect("sin llamadas");
    assert_eq!(vista.semanas.len(), 5);
    assert_eq!(vista.total_turnos, 0);
    assert!(vista.semanas.iter().all(|s| s.total_horas == 0.0));

    let reporte = vista_reporte(&ServicioCaido, &criterios, None, &pipeline).await.expect("vacío");
    assert!(reporte.reporte.claves.is_empty());
}

#[tokio::test]
async fn test_falla_al_obtener_turnos_se_informa() {
    let pipeline = PipelineFiltros::new(Santiago);
    let criterios = CriteriosFiltro::new("B1", 2024, 6);
    let err = vista_calendario(&ServicioCaido, &criterios, &pipeline).await.unwrap_err();
    assert!(err.es_recuperable());
    assert!(cargar_cuadro(&ServicioCaido, &"B1".into()).await.is_err());
}

#[tokio::test]
async fn test_cargar_cuadro_y_procesos_ordenados() {
    let colab = escenario();
    let cuadro: Identificador = "B1".into();
    let datos = cargar_cuadro(&colab, &cuadro).await.expect("cuadro");
    assert_eq!(datos.turnos.len(), 5);
    assert_eq!(datos.procesos.len(), 2);

    let procesos = procesos_de_cuadro(&colab, &cuadro).await.expect("procesos");
    let nombres: Vec<&str> = procesos.iter().map(|p| p.nombre.as_str()).collect();
    assert_eq!(nombres, vec!["Aseo", "urgencia"]);
}

#[tokio::test]
async fn test_pagina_de_reporte_independiente_por_persona() {
    let mut turnos = Vec::new();
    for dia in 1..=12u32 {
        turnos.push(turno(dia as i64, "Ana", "B1", &format!("2024-06-{:02}T08:00:00", dia), 8.0));
    }
    for dia in 1..=3u32 {
        turnos.push(turno(100 + dia as i64, "Luis", "B1", &format!("2024-06-{:02}T20:00:00", dia), 12.0));
    }
    let colab = ColaboradorMemoria::new(DatosCuadros { turnos, ..Default::default() });
    let pipeline = PipelineFiltros::new(Santiago);
    let vista = vista_reporte(&colab, &CriteriosFiltro::new("B1", 2024, 6), None, &pipeline)
        .await
        .expect("reporte");

    let externo = EstadoPaginacion::default();
    let mut por_grupo = PaginadorGrupos::default();
    por_grupo.set_pagina("Ana", 3);

    let pagina = pagina_de_reporte(&vista.reporte, &externo, &por_grupo, 2);
    assert_eq!(pagina.total_paginas, 1);
    assert_eq!(pagina.grupos.len(), 2);

    let ana = &pagina.grupos[0];
    assert_eq!(ana.nombre, "Ana");
    assert_eq!(ana.total_paginas, 3);
    assert_eq!(ana.turnos.len(), 2);
    assert_eq!(ana.total_horas, 96.0);
    assert_eq!(
        ana.ventana,
        vec![ElementoPagina::Pagina(1), ElementoPagina::Pagina(2), ElementoPagina::Pagina(3)]
    );

    let luis = &pagina.grupos[1];
    assert_eq!(luis.pagina, 1);
    assert_eq!(luis.turnos.len(), 3);
}

/// Backend fuera de servicio para todo
struct ServicioCaido;

#[async_trait]
impl Colaboradores for ServicioCaido {
    async fn obtener_equipo(&self, _cuadro_id: &Identificador) -> Result<Equipo, ErrorCuadro> {
        Err(ErrorCuadro::colaborador("obtener_equipo", "timeout"))
    }

    async fn obtener_turnos_cuadro(&self, _cuadro_id: &Identificador) -> Result<Vec<Turno>, ErrorCuadro> {
        Err(ErrorCuadro::colaborador("obtener_turnos_cuadro", "timeout"))
    }

    async fn obtener_procesos_cuadro(&self, _cuadro_id: &Identificador) -> Result<Vec<Proceso>, ErrorCuadro> {
        Err(ErrorCuadro::colaborador("obtener_procesos_cuadro", "timeout"))
    }
}
