use std::str::FromStr;

use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece};
use log::warn;

use crate::shared::{Fen, Move, PieceKind, Side, Square};

use super::{Rules, RulesError, Terminal};

/// Standard chess rules backed by a full legal-move generator.
pub struct StandardRules;

fn to_engine_square(square: Square) -> chess::Square {
    chess::Square::make_square(
        chess::Rank::from_index(square.rank() as usize),
        chess::File::from_index(square.file() as usize),
    )
}

fn from_engine_square(square: chess::Square) -> Option<Square> {
    let file = square.get_file().to_index() as u8;
    let rank = square.get_rank().to_index() as u8;
    Square::from_coords(file, rank)
}

fn to_engine_piece(kind: PieceKind) -> Piece {
    match kind {
        PieceKind::Pawn => Piece::Pawn,
        PieceKind::Knight => Piece::Knight,
        PieceKind::Bishop => Piece::Bishop,
        PieceKind::Rook => Piece::Rook,
        PieceKind::Queen => Piece::Queen,
        PieceKind::King => Piece::King,
    }
}

fn from_engine_piece(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

fn from_engine_color(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

impl Rules for StandardRules {
    fn legal_moves(&self, position: &Fen, from: Square) -> Vec<Move> {
        let board = match Board::from_str(position.as_str()) {
            Ok(board) => board,
            Err(_) => {
                warn!("legal_moves: unparseable position encoding: {}", position);
                return Vec::new();
            }
        };
        let source = to_engine_square(from);
        MoveGen::new_legal(&board)
            .filter(|mv| mv.get_source() == source)
            .filter_map(|mv| {
                Some(Move {
                    from,
                    to: from_engine_square(mv.get_dest())?,
                    promotion: mv.get_promotion().map(from_engine_piece),
                })
            })
            .collect()
    }

    fn apply_move(&self, position: &Fen, mv: &Move) -> Result<(Fen, Side), RulesError> {
        let board =
            Board::from_str(position.as_str()).map_err(|_| RulesError::InvalidPosition {
                fen: position.as_str().to_string(),
            })?;
        let engine_move = ChessMove::new(
            to_engine_square(mv.from),
            to_engine_square(mv.to),
            mv.promotion.map(to_engine_piece),
        );
        if !board.legal(engine_move) {
            return Err(RulesError::IllegalTransition);
        }
        let next = board.make_move_new(engine_move);
        Ok((
            Fen::new(next.to_string()),
            from_engine_color(next.side_to_move()),
        ))
    }

    fn is_terminal(&self, position: &Fen) -> Terminal {
        let board = match Board::from_str(position.as_str()) {
            Ok(board) => board,
            Err(_) => {
                warn!("is_terminal: unparseable position encoding: {}", position);
                return Terminal {
                    ended: false,
                    winner: None,
                };
            }
        };
        match board.status() {
            BoardStatus::Ongoing => Terminal {
                ended: false,
                winner: None,
            },
            BoardStatus::Stalemate => Terminal {
                ended: true,
                winner: None,
            },
            BoardStatus::Checkmate => Terminal {
                ended: true,
                winner: Some(from_engine_color(board.side_to_move()).opposite()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(text: &str) -> Square {
        text.parse().unwrap()
    }

    #[test]
    fn pawn_has_two_opening_moves() {
        let moves = StandardRules.legal_moves(&Fen::starting(), square("e2"));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.promotion.is_none()));
    }

    #[test]
    fn empty_square_has_no_moves() {
        let moves = StandardRules.legal_moves(&Fen::starting(), square("e4"));
        assert!(moves.is_empty());
    }

    #[test]
    fn generated_destinations_round_trip_through_algebraic_parsing() {
        for file in "abcdefgh".chars() {
            for rank in 1..=8 {
                let from = square(&format!("{}{}", file, rank));
                for mv in StandardRules.legal_moves(&Fen::starting(), from) {
                    let text = mv.to.to_string();
                    assert_eq!(text.parse::<Square>().unwrap(), mv.to);
                }
            }
        }
    }

    #[test]
    fn apply_move_flips_the_turn() {
        let mv = Move {
            from: square("e2"),
            to: square("e4"),
            promotion: None,
        };
        let (fen, turn) = StandardRules.apply_move(&Fen::starting(), &mv).unwrap();
        assert_eq!(turn, Side::Black);
        assert_eq!(fen.side_to_move(), Some(Side::Black));
        assert!(!fen.same_position(&Fen::starting()));
    }

    #[test]
    fn backward_pawn_move_is_illegal() {
        let mv = Move {
            from: square("e2"),
            to: square("e1"),
            promotion: None,
        };
        let result = StandardRules.apply_move(&Fen::starting(), &mv);
        assert_eq!(result, Err(RulesError::IllegalTransition));
    }

    #[test]
    fn promotion_moves_carry_the_piece_kind() {
        // White pawn on e7, kings tucked away in opposite corners.
        let position = Fen::new("8/4P2k/8/8/8/8/8/K7 w - - 0 1");
        let moves = StandardRules.legal_moves(&position, square("e7"));
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|mv| mv.promotion.is_some()));
        assert!(moves
            .iter()
            .any(|mv| mv.promotion == Some(PieceKind::Queen)));
    }

    #[test]
    fn checkmate_reports_the_winner() {
        // Fool's mate.
        let position =
            Fen::new("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        let terminal = StandardRules.is_terminal(&position);
        assert!(terminal.ended);
        assert_eq!(terminal.winner, Some(Side::Black));
    }

    #[test]
    fn ongoing_position_is_not_terminal() {
        let terminal = StandardRules.is_terminal(&Fen::starting());
        assert!(!terminal.ended);
        assert_eq!(terminal.winner, None);
    }
}
