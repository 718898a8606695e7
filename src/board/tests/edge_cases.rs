//! Checks, pins, en passant and castling corner cases.

use crate::board::movegen::{divide, perft};
use crate::board::Board;

fn root_ucis(board: &Board) -> Vec<String> {
    divide(board, 1).iter().map(|m| m.uci()).collect()
}

#[test]
fn test_double_check_only_king_moves() {
    // White king on e1 checked by the e8 rook and the a5 bishop at once;
    // e2 and d2 stay covered by the checkers, leaving d1, f1 and f2
    let board = Board::try_from_fen("k3r3/8/8/b7/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = root_ucis(&board);
    assert_eq!(moves.len(), 3);
    assert!(moves.iter().all(|m| m.starts_with("e1")));
    assert!(moves.contains(&"e1d1".to_string()));
    assert!(moves.contains(&"e1f1".to_string()));
    assert!(moves.contains(&"e1f2".to_string()));
}

#[test]
fn test_single_check_block_or_capture() {
    // Rook check down the e-file; the bishop can block on e3 or the king
    // can step aside
    let board = Board::try_from_fen("4k3/8/8/8/4r3/8/6B1/4K2N w - - 0 1").unwrap();
    let moves = root_ucis(&board);
    // Block with the bishop (g2-e4 is a capture of the checker? g2 sees f3, e4)
    assert!(moves.contains(&"g2e4".to_string()));
    assert!(moves.contains(&"e1d1".to_string()));
    // A knight move that neither blocks nor captures is illegal
    assert!(!moves.contains(&"h1g3".to_string()));
}

#[test]
fn test_pinned_knight_has_no_moves() {
    let board = Board::try_from_fen("4k3/8/8/8/4r3/8/4N3/4K3 w - - 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(moves.iter().all(|m| !m.starts_with("e2")), "{moves:?}");
    assert_eq!(perft(&board, 1), 4); // king to d1, d2, f1, f2
}

#[test]
fn test_pinned_slider_moves_along_the_ray() {
    // White rook e3 pinned by the e7 rook: may slide on the e-file only
    let board = Board::try_from_fen("4k3/4r3/8/8/8/4R3/8/4K3 w - - 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(moves.contains(&"e3e4".to_string()));
    assert!(moves.contains(&"e3e7".to_string())); // capture the pinner
    assert!(!moves.contains(&"e3a3".to_string()));
    assert!(!moves.contains(&"e3h3".to_string()));
}

#[test]
fn test_en_passant_exposing_rank_pin_is_rejected() {
    // King and both pawns share rank 5 with the enemy rook: capturing en
    // passant removes both pawns at once and uncovers the king
    let board = Board::try_from_fen("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(!moves.contains(&"b5c6".to_string()), "{moves:?}");
    assert_eq!(perft(&board, 1), 4); // b5b6, Ka4, Ka6, Kb6
}

#[test]
fn test_en_passant_capture_of_checking_pawn() {
    // Black just pushed d7d5 giving check; exd6 en passant removes the
    // checker even though the landing square is off the check mask
    let board = Board::try_from_fen("8/8/8/3pP3/4K3/8/8/7k w - d6 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(moves.contains(&"e5d6".to_string()), "{moves:?}");
}

#[test]
fn test_castling_rights_and_paths() {
    let board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(moves.contains(&"e1g1".to_string()));
    assert!(moves.contains(&"e1c1".to_string()));
    assert_eq!(perft(&board, 1), 26);
}

#[test]
fn test_no_castling_while_in_check() {
    let board = Board::try_from_fen("4k3/4r3/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(!moves.contains(&"e1g1".to_string()));
    assert!(!moves.contains(&"e1c1".to_string()));
}

#[test]
fn test_no_castling_through_attacked_square() {
    // The a6 bishop covers f1 (not g1): short castling is off, long is fine
    let board = Board::try_from_fen("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(!moves.contains(&"e1g1".to_string()), "{moves:?}");
    assert!(moves.contains(&"e1c1".to_string()));
}

#[test]
fn test_no_castling_onto_attacked_square() {
    // The a7 bishop covers g1 itself
    let board = Board::try_from_fen("4k3/b7/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(!moves.contains(&"e1g1".to_string()), "{moves:?}");
}

#[test]
fn test_no_castling_across_occupied_rook_path() {
    // The b1 knight occupies the rook's path; the king path c1/d1 is clear
    let board = Board::try_from_fen("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(!moves.contains(&"e1c1".to_string()), "{moves:?}");
    assert!(moves.contains(&"e1g1".to_string()));
}

#[test]
fn test_attacked_rook_path_does_not_block_castling() {
    // Only the king path must be safe; b1 being attacked is irrelevant
    let board = Board::try_from_fen("4k3/8/8/8/8/8/p7/R3K3 w Q - 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(moves.contains(&"e1c1".to_string()), "{moves:?}");
}

#[test]
fn test_king_cannot_step_back_along_checking_ray() {
    // Rook on e8 checks; e1->e2 stays on the ray... the other file squares
    // behind the king are still covered with the king removed
    let board = Board::try_from_fen("4k3/8/8/8/4r3/8/4K3/8 w - - 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(!moves.contains(&"e2e1".to_string()), "{moves:?}");
    assert!(!moves.contains(&"e2e3".to_string()));
    assert!(moves.contains(&"e2d2".to_string()));
}

#[test]
fn test_pinned_pawn_promotions() {
    // The e7 pawn is pinned diagonally by the f8 bishop: pushing to e8
    // leaves the ray and is illegal, capturing the pinner promotes
    let board = Board::try_from_fen("5b2/4P3/3K4/8/8/8/8/7k w - - 0 1").unwrap();
    let moves = root_ucis(&board);
    assert!(!moves.iter().any(|m| m.starts_with("e7e8")), "{moves:?}");
    for promo in ["e7f8q", "e7f8r", "e7f8b", "e7f8n"] {
        assert!(moves.contains(&promo.to_string()), "{moves:?}");
    }
}
