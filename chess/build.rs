use std::path::Path;
use std::{env, io};

mod near_attacks {
    use std::io::{self, BufWriter, Write};
    use std::{fs, path::Path};

    use chessrules_base::bitboard::Bitboard;
    use chessrules_base::geometry;
    use chessrules_base::types::Coord;

    fn generate_directed(deltas: &[(isize, isize)]) -> [Bitboard; 64] {
        let mut res = [Bitboard::EMPTY; 64];
        for c in Coord::iter() {
            let mut bb = Bitboard::EMPTY;
            for &(delta_file, delta_rank) in deltas {
                if let Some(nc) = c.shift(delta_file, delta_rank) {
                    bb.set(nc);
                }
            }
            res[c.index()] = bb;
        }
        res
    }

    fn print_bitboards<W: Write>(w: &mut W, name: &str, bs: [Bitboard; 64]) -> io::Result<()> {
        writeln!(w, "const {}: [Bitboard; 64] = [", name)?;
        for (i, b) in bs.iter().enumerate() {
            writeln!(w, "    /*{:2}*/ bb(0x{:016x}),", i, b.as_raw())?;
        }
        writeln!(w, "];")?;
        Ok(())
    }

    pub fn gen(out_path: &Path) -> io::Result<()> {
        let f = fs::File::create(out_path)?;
        let mut w = BufWriter::new(&f);

        print_bitboards(
            &mut w,
            "KING_ATTACKS",
            generate_directed(&geometry::KING_OFFSETS),
        )?;
        writeln!(&mut w)?;
        print_bitboards(
            &mut w,
            "KNIGHT_ATTACKS",
            generate_directed(&geometry::KNIGHT_OFFSETS),
        )?;

        Ok(())
    }
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    near_attacks::gen(&Path::new(&out_dir).join("near_attacks.rs"))?;

    Ok(())
}
