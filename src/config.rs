// src/config.rs
//
// Configuration NATIVE : ligne de commande + logs.
// (En wasm32, pas d’arguments : la page démarre directement la vue.)

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Filtre de logs par défaut (si ni --log ni RUST_LOG).
const FILTRE_DEFAUT: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "calculatrice", version, about = "Calculatrice (+ − × ÷)")]
pub struct Args {
    /// Rejoue un script de touches sans ouvrir de fenêtre (ex: "12+30=").
    /// Touches : 0-9 . + - * / = ; C efface tout ; < efface un chiffre.
    #[arg(long, value_name = "SCRIPT")]
    pub touches: Option<String>,

    /// Avec --touches : imprime l’état final en JSON.
    #[arg(long, requires = "touches")]
    pub json: bool,

    /// Filtre de logs (syntaxe EnvFilter), prioritaire sur RUST_LOG.
    #[arg(long, value_name = "FILTRE")]
    pub log: Option<String>,
}

/// Installe le subscriber tracing (sortie sur stderr : stdout reste au mode --touches).
pub fn init_logs(filtre: Option<&str>) {
    let filtre = filtre
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(FILTRE_DEFAUT));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}
