//! Dashboard
//!
//! KPI cards and charts built from one KPI snapshot. The traffic, usage and
//! attempts charts show fixed placeholder series until the backend exposes
//! them; the success-rate and top-character views use fetched data.

use serde::Serialize;

use crate::models::{Kpi, TopCharacter};
use crate::services::DashboardApi;

/// Entries shown per mode in the top-characters list
pub const TOP_CHARACTERS_LIMIT: usize = 5;

const BLUE: &str = "rgb(37, 99, 235)";
const GREEN: &str = "rgb(5, 150, 105)";
const PIE_COLORS: [&str; 4] = [
    "rgba(37, 99, 235, 0.8)",
    "rgba(5, 150, 105, 0.8)",
    "rgba(234, 88, 12, 0.8)",
    "rgba(168, 85, 247, 0.8)",
];
const MODE_LABELS: [&str; 4] = ["Características", "Descrição", "Imagem", "Emoji"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    /// One color for the whole series, or one per point for pie charts
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    fn new(title: &str, kind: ChartKind, labels: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            kind,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            datasets: Vec::new(),
        }
    }

    fn dataset(mut self, label: &str, data: &[f64], colors: &[&str]) -> Self {
        self.datasets.push(Dataset {
            label: label.to_string(),
            data: data.to_vec(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    /// Largest value across all datasets, for axis scaling
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub cards: Vec<KpiCard>,
    pub charts: Vec<ChartSpec>,
    pub top_characters: Vec<(String, Vec<TopCharacter>)>,
}

impl DashboardView {
    /// Build the view; a missing snapshot renders zeros and empty lists
    pub fn build(kpi: Option<&Kpi>) -> Self {
        let empty = Kpi::default();
        let kpi = kpi.unwrap_or(&empty);

        let cards = vec![
            KpiCard {
                title: "Total de Usuários",
                value: kpi.total_users,
            },
            KpiCard {
                title: "Usuários Ativos",
                value: kpi.active_users,
            },
            KpiCard {
                title: "Partidas Diárias",
                value: kpi.daily_games,
            },
            KpiCard {
                title: "Total de Tentativas",
                value: kpi.total_attempts,
            },
        ];

        let mut charts = placeholder_charts();
        if !kpi.success_rate.is_empty() {
            charts.push(success_rate_chart(kpi));
        }

        let top_characters = kpi
            .top_characters
            .iter()
            .map(|(mode, list)| {
                let top = list.iter().take(TOP_CHARACTERS_LIMIT).cloned().collect();
                (mode.clone(), top)
            })
            .collect();

        Self {
            cards,
            charts,
            top_characters,
        }
    }
}

fn placeholder_charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec::new(
            "Acessos vs tentativas (24h)",
            ChartKind::Line,
            &["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"],
        )
        .dataset("Acessos", &[12.0, 19.0, 3.0, 5.0, 2.0, 3.0], &[BLUE])
        .dataset("Tentativas", &[8.0, 15.0, 25.0, 35.0, 20.0, 15.0], &[GREEN]),
        ChartSpec::new("Uso por Modo de Jogo", ChartKind::Pie, &MODE_LABELS).dataset(
            "Uso",
            &[30.0, 25.0, 25.0, 20.0],
            &PIE_COLORS,
        ),
        ChartSpec::new("Tentativas vs Acertos por Modo", ChartKind::Bar, &MODE_LABELS)
            .dataset("Tentativas", &[120.0, 95.0, 80.0, 65.0], &[BLUE])
            .dataset("Acertos", &[85.0, 70.0, 55.0, 45.0], &[GREEN]),
    ]
}

fn success_rate_chart(kpi: &Kpi) -> ChartSpec {
    let labels: Vec<&str> = kpi.success_rate.keys().map(String::as_str).collect();
    let data: Vec<f64> = kpi.success_rate.values().copied().collect();
    ChartSpec::new("Taxa de Acerto por Modo", ChartKind::Bar, &labels).dataset(
        "Taxa de acerto",
        &data,
        &[GREEN],
    )
}

/// Dashboard page controller
pub struct DashboardPage<'a> {
    api: &'a dyn DashboardApi,
    kpi: Option<Kpi>,
    loading: bool,
}

impl<'a> DashboardPage<'a> {
    pub fn new(api: &'a dyn DashboardApi) -> Self {
        Self {
            api,
            kpi: None,
            loading: true,
        }
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Fetch a fresh snapshot; failures are logged and keep the last one
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.api.kpis().await {
            Ok(kpi) => self.kpi = Some(kpi),
            Err(e) => tracing::error!(error = %e, "Erro ao carregar KPIs"),
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn kpi(&self) -> Option<&Kpi> {
        self.kpi.as_ref()
    }

    pub fn view(&self) -> DashboardView {
        DashboardView::build(self.kpi.as_ref())
    }
}
