pub mod fyfeio;
