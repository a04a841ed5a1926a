// Ventana de indicadores de página con elipsis.

use serde::{Serialize, Serializer};

/// Radio por defecto alrededor de la página actual
pub const RADIO_POR_DEFECTO: usize = 2;

/// Un indicador de la barra de paginación: un número o `"..."`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementoPagina {
    Pagina(usize),
    Elipsis,
}

impl Serialize for ElementoPagina {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ElementoPagina::Pagina(n) => serializer.serialize_u64(*n as u64),
            ElementoPagina::Elipsis => serializer.serialize_str("..."),
        }
    }
}

/// Calcula la secuencia de indicadores para `pagina_actual` de `total_paginas`.
///
/// Siempre incluye la primera y la última página; alrededor de la actual
/// muestra `radio` páginas a cada lado y reemplaza los huecos por `Elipsis`.
/// La página actual fuera de rango se ajusta a `[1, total_paginas]`.
///
/// ```text
/// calcular_ventana(5, 10, 2) -> 1 ... 3 4 5 6 7 ... 10
/// ```
pub fn calcular_ventana(pagina_actual: usize, total_paginas: usize, radio: usize) -> Vec<ElementoPagina> {
    if total_paginas == 0 {
        return Vec::new();
    }
    if total_paginas == 1 {
        return vec![ElementoPagina::Pagina(1)];
    }

    let actual = pagina_actual.clamp(1, total_paginas);
    let inicio = actual.saturating_sub(radio).max(2);
    let fin = actual.saturating_add(radio).min(total_paginas - 1);

    let mut salida = vec![ElementoPagina::Pagina(1)];
    if inicio > 2 {
        salida.push(ElementoPagina::Elipsis);
    }
    for p in inicio..=fin {
        salida.push(ElementoPagina::Pagina(p));
    }
    if fin < total_paginas - 1 {
        salida.push(ElementoPagina::Elipsis);
    }
    salida.push(ElementoPagina::Pagina(total_paginas));
    salida
}
