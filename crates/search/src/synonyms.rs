use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Expansion fan-out cap: only the first two alternates of a canonical
/// entry are ever added to a term set.
pub const MAX_ALTERNATES: usize = 2;

/// Canonical lowercase phrase -> alternate phrasings, in priority order.
/// Lookup keys keep their diacritics; folding happens at match time.
static ENTRIES: &[(&str, &[&str])] = &[
    ("carga horária", &["CH", "horas", "h", "carga", "horária"]),
    ("disciplina", &["matéria", "componente curricular", "curso"]),
    ("obrigatória", &["compulsória", "mandatória", "obrigatório"]),
    ("trancamento", &["cancelamento", "suspensão", "interrupção"]),
    ("matrícula", &["inscrição", "registro", "cadastro"]),
    ("regulamento", &["norma", "regra", "resolução", "estatuto"]),
    ("curso", &["graduação", "bacharelado", "licenciatura"]),
    ("aluno", &["discente", "estudante"]),
    ("professor", &["docente", "ensinante"]),
    ("coordenador", &["coordenador de curso", "diretor de curso"]),
    ("nota", &["conceito", "avaliação", "pontuação"]),
    ("frequência", &["presença", "assiduidade"]),
    ("aprovação", &["aprovado", "passou"]),
    ("reprovação", &["reprovado", "não passou"]),
    ("exame", &["prova", "teste", "avaliação"]),
    ("calendário", &["cronograma", "agenda", "datas"]),
    ("biblioteca", &["acervo", "coleção", "livros"]),
    ("laboratório", &["lab", "experimental", "prática"]),
    ("estágio", &["prática profissional", "experiência profissional"]),
    ("tcc", &["trabalho de conclusão de curso", "monografia", "projeto final"]),
    ("graduação", &["formação", "curso superior"]),
    ("mestrado", &["pós-graduação", "mestrado acadêmico", "mestrado profissional"]),
    ("doutorado", &["pós-graduação", "doutorado acadêmico", "doutorado profissional"]),
    ("pesquisa", &["investigação", "estudo", "projeto de pesquisa"]),
    ("extensão", &["projeto de extensão", "ação comunitária", "serviço à comunidade"]),
    ("monitoria", &["auxílio docente", "assistência de ensino"]),
    ("bolsa", &["auxílio financeiro", "financiamento", "subsídio"]),
    ("edital", &["chamada", "convocação", "seleção"]),
    ("processo seletivo", &["vestibular", "concurso", "seleção"]),
    ("transferência", &["mudança de curso", "troca de curso", "mobilidade"]),
    ("diploma", &["certificado", "certificação", "título"]),
    ("histórico", &["registro acadêmico", "boletim", "notas"]),
    ("secretaria", &["setor administrativo", "administração acadêmica"]),
    ("coordenação", &["direção", "gerência", "administração"]),
    ("reitoria", &["administração superior", "gestão universitária"]),
    ("campus", &["unidade", "polo", "sede"]),
    ("ativo", &["regular", "matriculado", "frequentando"]),
    ("trancado", &["suspenso", "interrompido", "cancelado"]),
    ("formado", &["egresso", "graduado", "diplomado"]),
    ("evasão", &["abandono", "desistência", "saída"]),
    ("período", &["semestre", "fase", "etapa", "nível", "periodo"]),
    ("6º", &["6", "sexto", "6o", "6º", "seis", "sexto nível"]),
    ("jubilamento", &["desligamento", "expulsão", "eliminação", "cancelamento de matrícula"]),
    (
        "trancamento de matrícula",
        &["trancar matrícula", "suspender matrícula", "cancelar matrícula temporariamente"],
    ),
    (
        "histórico escolar",
        &["boletim", "registro acadêmico", "notas", "histórico acadêmico"],
    ),
    ("prazo", &["período", "tempo", "data limite", "vencimento", "limite"]),
    ("solicitar", &["pedir", "requerer", "requisitar", "obter", "conseguir"]),
    (
        "disciplinas do 6º período",
        &["6º nível", "sexto semestre", "disciplinas do sexto nível"],
    ),
    ("qual o prazo", &["qual o período", "qual o tempo", "qual a data"]),
    ("como solicitar", &["como pedir", "como requerer", "como obter"]),
    (
        "quais disciplinas",
        &["quais matérias", "quais cursos", "quais componentes curriculares"],
    ),
    ("componente curricular", &["disciplina", "matéria", "curso", "unidade curricular"]),
    ("artigo", &["art.", "art", "artigo"]),
    ("parágrafo", &["§", "parágrafo único", "paragrafo"]),
    ("inciso", &["inc.", "inciso", "item"]),
    ("resolução", &["norma", "regra", "decisão", "deliberação"]),
];

static TABLE: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Exact-match lookup on the lowercase, unfolded term.
pub fn alternates(term: &str) -> Option<&'static [&'static str]> {
    TABLE.get(term).copied()
}
