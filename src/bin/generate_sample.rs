//! Writes `dados.csv`, a synthetic survey export with the form's exact
//! headers, for trying the viewer without real member data.

const YES_NO_QUESTIONS: [&str; 8] = [
    "Está realizando seu discipulado de forma periódica?",
    "Está movimentando sua Ficha de Oikós?",
    "Ganhou vidas em 2024?",
    "Ganhou vidas em 2023?",
    "Está discipulando novos convertidos/membros de sua célula?",
    "Tem participado das Reuniões de Liderança com o Pr Joel?",
    "Tem participado dos Treinamentos do Trilho do Crescimento?",
    "Tem servido nos Encontros, Eventos de outros Ministérios e cursos da UDF?",
];

const PERCENT_QUESTIONS: [&str; 8] = [
    "Dízimos praticados em 2024:",
    "Ofertas praticadas em 2024:",
    "Ofertas destinadas a Missões praticadas em 2024:",
    "Dificuldades financeiras, onde “0” é estar sem dívidas e “100” é estar muito endividado:",
    "Está satisfeito financeiramente, onde “0” é estar insatisfeito e “100” é estar satisfeito:",
    "Considera correta sua assiduidade nas Celebrações, onde “0” é estar incorreto e “100” é estar correto:",
    "Considera correta sua assiduidade na sua Célula, onde “0” é estar incorreto e “100” é estar correto:",
    "Considera correta sua assiduidade em seu Ministério, onde “0” é estar incorreto e “100” é estar correto:",
];

const FIRST_NAMES: [&str; 12] = [
    "Ana", "Bruno", "Carla", "Daniel", "Elaine", "Felipe", "Gabriela", "Henrique", "Isabela",
    "João", "Larissa", "Marcos",
];
const LAST_NAMES: [&str; 6] = ["Silva", "Souza", "Oliveira", "Santos", "Pereira", "Costa"];
const MINISTRIES: [&str; 6] = ["Louvor", "Jovens", "Infantil", "Intercessão", "Recepção", "Mídia"];
const MARITAL_STATUSES: [&str; 4] = ["Solteiro(a)", "Casado(a)", "Divorciado(a)", "Viúvo(a)"];
const ENGAGEMENT: [&str; 4] = ["Excelente", "Bom", "Regular", "Precisa melhorar"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

/// A percentage answer the way respondents typed them: mostly "NN%",
/// sometimes a bare number, occasionally free text.
fn percent_answer(rng: &mut SimpleRng) -> String {
    let value = (rng.next_f64() * 100.0).round();
    match rng.below(20) {
        0 => "não sei".to_string(),
        1..=4 => format!("{value}"),
        _ => format!("{value}%"),
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let mut headers = vec![
        "Carimbo de data/hora",
        "Nome de usuário",
        "Nome do Membro",
        "Ministérios que participa",
        "Selecione seu Estado Civil",
        "Está em relacionamento romântico?",
    ];
    headers.extend(YES_NO_QUESTIONS);
    headers.extend(PERCENT_QUESTIONS);
    headers.push("Como você considera seu engajamento e desempenho em seu Ministério?");
    headers.push(
        "Escreva aqui o que deseja compartilhar como uma estratégia de melhoria em seu Ministério:",
    );

    let output_path = "dados.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer.write_record(&headers).expect("Failed to write header");

    let mut respondents = 0;
    for (i, first) in FIRST_NAMES.iter().enumerate() {
        let last = LAST_NAMES[i % LAST_NAMES.len()];
        let name = format!("{first} {last}");
        let email = format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase());

        // One to three ministries, joined the way the form tool does it.
        let count = 1 + rng.below(3);
        let mut ministries: Vec<&str> = Vec::new();
        while ministries.len() < count {
            let m = rng.pick(&MINISTRIES);
            if !ministries.contains(&m) {
                ministries.push(m);
            }
        }

        let mut record = vec![
            format!("2024/11/{:02} 19:{:02}:00", 1 + i % 28, rng.below(60)),
            email,
            // Stray whitespace, as found in real exports.
            if i % 4 == 0 { format!(" {name} ") } else { name },
            ministries.join(", "),
            rng.pick(&MARITAL_STATUSES).to_string(),
            rng.pick(&["Sim", "Não"]).to_string(),
        ];
        record.extend((0..YES_NO_QUESTIONS.len()).map(|_| rng.pick(&["Sim", "Não"]).to_string()));
        record.extend((0..PERCENT_QUESTIONS.len()).map(|_| percent_answer(&mut rng)));
        record.push(rng.pick(&ENGAGEMENT).to_string());
        record.push(String::new());

        writer.write_record(&record).expect("Failed to write row");
        respondents += 1;
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {respondents} respondents to {output_path}");
}
