use std::env;
use std::path::PathBuf;

use chrono_tz::Tz;

use crate::error::ErrorCuadro;
use crate::paginacion::{RADIO_POR_DEFECTO, TAMANO_PAGINA_POR_DEFECTO};

/// Zona usada para todas las claves de fecha si no se configura otra
pub const ZONA_POR_DEFECTO: Tz = chrono_tz::America::Santiago;

#[derive(Debug, Clone)]
pub struct Configuracion {
    pub zona_horaria: Tz,
    pub tamano_pagina: usize,
    pub radio_paginas: usize,
    /// Instantánea JSON que lee el binario de inspección
    pub archivo_datos: Option<PathBuf>,
    pub cuadro_id: Option<String>,
    pub anio: Option<i32>,
    pub mes: Option<u32>,
    pub proceso_id: Option<String>,
    /// Texto buscado dentro de los perfiles del equipo
    pub perfil: Option<String>,
}

impl Default for Configuracion {
    fn default() -> Self {
        Configuracion {
            zona_horaria: ZONA_POR_DEFECTO,
            tamano_pagina: TAMANO_PAGINA_POR_DEFECTO,
            radio_paginas: RADIO_POR_DEFECTO,
            archivo_datos: None,
            cuadro_id: None,
            anio: None,
            mes: None,
            proceso_id: None,
            perfil: None,
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Interpreta el valor de una variable numérica; si no se puede, se avisa y se usa `None`
fn interpretar_numero<T: std::str::FromStr>(nombre: &str, valor: &str) -> Option<T> {
    match valor.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("{}='{}' no es un número válido; se usa el valor por defecto", nombre, valor);
            None
        }
    }
}

fn var_numerica<T: std::str::FromStr>(nombre: &str) -> Option<T> {
    interpretar_numero(nombre, &env::var(nombre).ok()?)
}

// vacío o sólo espacios cuenta como no configurado
fn texto_no_vacio(valor: String) -> Option<String> {
    let recortado = valor.trim();
    (!recortado.is_empty()).then(|| recortado.to_string())
}

fn var_texto(nombre: &str) -> Option<String> {
    env::var(nombre).ok().and_then(texto_no_vacio)
}

impl Configuracion {
    /// Construye la configuración desde `.env` y variables de entorno:
    /// CUADROS_ZONA_HORARIA, CUADROS_TAMANO_PAGINA, CUADROS_RADIO_PAGINAS,
    /// CUADROS_ARCHIVO_DATOS, CUADROS_CUADRO_ID, CUADROS_ANIO, CUADROS_MES,
    /// CUADROS_PROCESO_ID, CUADROS_PERFIL.
    pub fn desde_entorno() -> Result<Self, ErrorCuadro> {
        load_dotenv();
        let mut cfg = Configuracion::default();

        if let Ok(zona) = env::var("CUADROS_ZONA_HORARIA") {
            cfg.zona_horaria = zona
                .trim()
                .parse::<Tz>()
                .map_err(|e| ErrorCuadro::Configuracion(format!("zona horaria '{}': {}", zona, e)))?;
        }
        if let Some(t) = var_numerica::<usize>("CUADROS_TAMANO_PAGINA") {
            cfg.tamano_pagina = t.max(1);
        }
        if let Some(r) = var_numerica::<usize>("CUADROS_RADIO_PAGINAS") {
            cfg.radio_paginas = r;
        }
        cfg.archivo_datos = env::var("CUADROS_ARCHIVO_DATOS").ok().map(PathBuf::from);
        cfg.cuadro_id = var_texto("CUADROS_CUADRO_ID");
        cfg.anio = var_numerica::<i32>("CUADROS_ANIO");
        cfg.mes = var_numerica::<u32>("CUADROS_MES").filter(|m| (1..=12).contains(m));
        cfg.proceso_id = var_texto("CUADROS_PROCESO_ID");
        cfg.perfil = var_texto("CUADROS_PERFIL");

        Ok(cfg)
    }
}
