//! The standard ten-square board.

use super::{Board, Square};
use crate::effects::{RentStrategy, SpecialEffect};

/// Build the standard board, start square first.
///
/// | pos | square               | kind     | price | rent / fee / effect |
/// |-----|----------------------|----------|-------|---------------------|
/// | 0   | Avenida Principal    | property | 200   | rent 50             |
/// | 1   | Companhia de Energia | company  | 150   | fixed 30            |
/// | 2   | Sorte ou Revés       | special  |       | receive 50          |
/// | 3   | Rua da Praia         | property | 180   | rent 40             |
/// | 4   | Companhia de Água    | company  | 150   | 10 x dice           |
/// | 5   | Visita à Prisão      | special  |       | just visiting       |
/// | 6   | Avenida Central      | property | 220   | rent 60             |
/// | 7   | Companhia de Gás     | company  | 150   | fixed 35            |
/// | 8   | Ponto de Partida     | special  |       | none                |
/// | 9   | Rua das Flores       | property | 160   | rent 35             |
///
/// The pass-start bonus is paid by the turn engine on wraparound, not by
/// the "Ponto de Partida" square.
#[must_use]
pub fn standard_board() -> Board {
    let squares = vec![
        Square::property("Avenida Principal", 200, 50),
        Square::company("Companhia de Energia", 150, RentStrategy::fixed(30)),
        Square::special("Sorte ou Revés", SpecialEffect::grant(50)),
        Square::property("Rua da Praia", 180, 40),
        Square::company("Companhia de Água", 150, RentStrategy::proportional(10)),
        Square::special("Visita à Prisão", SpecialEffect::JailVisit),
        Square::property("Avenida Central", 220, 60),
        Square::company("Companhia de Gás", 150, RentStrategy::fixed(35)),
        Square::plain("Ponto de Partida"),
        Square::property("Rua das Flores", 160, 35),
    ];

    Board { squares }
}
