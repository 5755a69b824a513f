use anyhow::Result;
use trajeto_patcher::{PatchSpec, Patcher};

/// Target file, resolved against the current working directory.
const TARGET_FILE: &str = "src/App.jsx";

/// Matches the old synchronous simularTrajeto from its header down to the
/// closing brace of the 3-second timer callback. Spans lines via
/// dot-matches-newline.
const OLD_SIMULAR_TRAJETO: &str =
    r"const simularTrajeto = \(\) => \{\s+setSimulando\(true\);.*?\}, 3000\);\s*\};";

/// The interval-driven rewrite: guards against a missing logged-in driver and
/// pushes one position to Supabase every 3 seconds until the route is done.
const NEW_SIMULAR_TRAJETO: &str = r#"const simularTrajeto = async () => {
    if (!motoristaLogado) {
      alert("Nenhum motorista logado para testar!");
      return;
    }

    setSimulando(true);
    console.log("Iniciando simulação para:", motoristaLogado);

    const pontos = [
      { lat: -23.5505, lng: -46.6333 },
      { lat: -23.5515, lng: -46.6343 },
      { lat: -23.5525, lng: -46.6353 },
      { lat: -23.5535, lng: -46.6363 }
    ];

    let i = 0;
    const intervalo = setInterval(async () => {
      if (i >= pontos.length) {
        clearInterval(intervalo);
        setSimulando(false);
        console.log("Simulação finalizada.");
        return;
      }

      const { error } = await supabase
        .from('motoristas')
        .update({
          lat: pontos[i].lat,
          lng: pontos[i].lng,
          ultimo_sinal: new Date().toISOString()
        })
        .eq('nome', motoristaLogado);

      if (error) {
        console.error("Erro ao atualizar banco na simulação:", error.message);
      } else {
        console.log(`Posição ${i + 1} enviada com sucesso!`);
      }

      i++;
    }, 3000);
  };"#;

fn main() -> Result<()> {
    let spec = PatchSpec::new(OLD_SIMULAR_TRAJETO, NEW_SIMULAR_TRAJETO);
    let patcher = Patcher::new(TARGET_FILE, spec);

    patcher.run()?;

    println!("Função simularTrajeto substituída com sucesso!");
    Ok(())
}
