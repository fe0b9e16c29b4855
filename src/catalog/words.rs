// Built-in catalog rows.
// Order is significant: the daily pick is `day_of_year % WORDS.len()`, so
// inserting a row shifts every later day.
use super::{WordContext, WordEntry};

pub static WORDS: &[WordEntry] = &[
    WordEntry {
        id: "angkiki",
        word: "紅吱吱",
        romaji: "Âng-ki-ki",
        color_hex: "#D32F2F", // vivid red
        is_dark: true,
        category: "視覺",
        context: WordContext {
            sentence: "伊穿一領紅吱吱的衫，看起來真喜氣。",
            meaning: "形容紅色非常鮮豔、搶眼。",
        },
        desc: "「吱吱」是形容色彩飽和度極高的狀態。通常用於形容衣服、花朵或是喜慶場合的裝飾，給人一種熱情、充滿活力的感覺。類似的還有「紅記記」(Âng-kì-kì)。",
    },
    WordEntry {
        id: "pehsutsut",
        word: "白雪雪",
        romaji: "Pe̍h-sut-sut",
        color_hex: "#F5F5F5", // snow white
        is_dark: false,
        category: "視覺",
        context: WordContext {
            sentence: "棉被洗甲白雪雪，曝佇日頭腳真芳。",
            meaning: "形容非常潔白，乾淨得像雪一樣。",
        },
        desc: "用「雪」來形容白的程度，既強調了顏色的純度，也帶有一種乾淨、清新的意象。常用來形容皮膚、衣物或牆面。",
    },
    WordEntry {
        id: "ososo",
        word: "烏趖趖",
        romaji: "O͘-sô-sô",
        color_hex: "#212121", // pitch black
        is_dark: true,
        category: "視覺",
        context: WordContext {
            sentence: "規間厝暗摸摸，烏趖趖，行路愛細二。",
            meaning: "形容非常黑暗，伸手不見五指；或形容髒得發黑。",
        },
        desc: "「趖趖」加強了黑的程度，有時帶有一種令人不安或是不乾淨的負面語氣。與之相似的還有「烏魯魯」(O͘-lu-lu) 或 「烏嘛嘛」(O͘-mà-mà)。",
    },
    WordEntry {
        id: "kimsihsih",
        word: "金爍爍",
        romaji: "Kim-sih-sih",
        color_hex: "#FFD700", // gold
        is_dark: false,
        category: "光影",
        context: WordContext {
            sentence: "日頭出來矣，海面金爍爍，真媠。",
            meaning: "形容光芒閃耀，非常刺眼或華麗。",
        },
        desc: "「爍爍」描繪了光線閃動的樣子。這個詞常用來形容陽光下的水面、黃金飾品，或是某人打扮得光鮮亮麗。",
    },
    WordEntry {
        id: "siothngthng",
        word: "燒燙燙",
        romaji: "Sio-thǹg-thǹg",
        color_hex: "#FF5722", // hot orange
        is_dark: true,
        category: "觸覺",
        context: WordContext {
            sentence: "這碗麵燒燙燙，你食的時陣愛注意。",
            meaning: "形容溫度很高，非常燙手或燙口。",
        },
        desc: "「燙燙」直接傳達了溫度的熾熱感。在台灣的飲食文化中，食物趁熱吃是美味的象徵，但也常用這個詞來提醒別人小心。",
    },
    WordEntry {
        id: "lengpingping",
        word: "冷冰冰",
        romaji: "Léng-ping-ping",
        color_hex: "#81D4FA", // ice blue
        is_dark: false,
        category: "觸覺",
        context: WordContext {
            sentence: "伊的手冷冰冰，敢是受風寒？",
            meaning: "形容溫度極低，像冰一樣；也形容態度冷淡。",
        },
        desc: "除了形容物體的物理溫度，這個詞也常轉用於形容人際關係的疏離，或是臉色不好看、毫無熱情。",
    },
    WordEntry {
        id: "tinbutbut",
        word: "甜粅粅",
        romaji: "Tiⁿ-but-but",
        color_hex: "#F48FB1", // candy pink
        is_dark: false,
        category: "味覺",
        context: WordContext {
            sentence: "這杯奶茶甜粅粅，我食無合。",
            meaning: "形容味道非常甜，甚至甜到有點膩人。",
        },
        desc: "「粅粅」這種疊字帶有一種黏稠、濃郁的感覺。這個詞通常帶有一點點負面意味，暗示甜度超過了適當的範圍，或者形容人嘴巴很甜（可能有企圖）。",
    },
    WordEntry {
        id: "kiamtoktok",
        word: "鹹篤篤",
        romaji: "Kiâm-tok-tok",
        color_hex: "#795548", // soy-sauce brown
        is_dark: true,
        category: "味覺",
        context: WordContext {
            sentence: "這盤菜落傷濟鹽，鹹篤篤。",
            meaning: "形容味道死鹹，非常難以入口。",
        },
        desc: "「篤篤」給人一種硬邦邦、死板的感覺，用來形容鹹味，表示那種鹹是不帶層次的、令人皺眉的重鹹。",
    },
    WordEntry {
        id: "busasa",
        word: "霧嗄嗄",
        romaji: "Bū-sà-sà",
        color_hex: "#9E9E9E", // fog grey
        is_dark: true,
        category: "狀態",
        context: WordContext {
            sentence: "聽伊講甲霧嗄嗄，完全聽無。",
            meaning: "形容視線模糊不清，引申為搞不清楚狀況、一頭霧水。",
        },
        desc: "「嗄嗄」模擬了在霧中看不清東西的迷茫感。現代生活中最常用於形容對某件事理解混亂，腦袋一片混亂的狀態。",
    },
    WordEntry {
        id: "chhiohaihai",
        word: "笑咍咍",
        romaji: "Chhiò-hai-hai",
        color_hex: "#FFCC80", // warm yellow
        is_dark: false,
        category: "表情",
        context: WordContext {
            sentence: "看伊笑咍咍，應該是有啥物好代誌。",
            meaning: "形容笑得很開心、很燦爛的樣子。",
        },
        desc: "「咍咍」是對笑聲或笑貌的描寫。這個詞充滿了正向的情緒，讓人聽了也能感受到那份喜悅與輕鬆。",
    },
    WordEntry {
        id: "nngsiusiu",
        word: "軟修修",
        romaji: "Nn̄g-siû-siû",
        color_hex: "#E1BEE7", // soft lilac
        is_dark: false,
        category: "觸覺",
        context: WordContext {
            sentence: "這塊麵包軟修修，真好食。",
            meaning: "形容質地非常柔軟、蓬鬆。",
        },
        desc: "「修修」常用來形容物體極度柔軟，甚至有點缺乏支撐力的狀態。可以用來形容食物（如麻糬、麵包），也可以形容人無力攤在椅子上。",
    },
    WordEntry {
        id: "yliauliau",
        word: "活跳跳",
        romaji: "Oa̍h-thiàu-thiàu",
        color_hex: "#76FF03", // fresh green
        is_dark: false,
        category: "動態",
        context: WordContext {
            sentence: "這尾魚猶活跳跳，一定真鮮。",
            meaning: "形容非常有活力，生猛活躍的樣子。",
        },
        desc: "最常用於形容海鮮的新鮮程度，指魚蝦還在跳動。引申為形容人精力旺盛，充滿生命力。",
    },
];
